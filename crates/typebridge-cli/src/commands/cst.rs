use std::path::PathBuf;

use typebridge_compiler::{Error, Result};
use typebridge_script::parse;

use super::inputs::{label, read_file};

pub struct CstArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: CstArgs) {
    match execute(&args) {
        Ok(dump) => print!("{}", dump),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Tree dump of the source. Syntax errors go to stderr; the partial tree is
/// still dumped.
pub fn execute(args: &CstArgs) -> Result<String> {
    let (text, label) = match (&args.source_text, &args.source_path) {
        (Some(text), _) => (text.clone(), "<text>".to_string()),
        (None, Some(path)) => (read_file(path)?, label(path)),
        (None, None) => {
            return Err(Error::Internal(
                "a source file or --text is required".to_string(),
            ));
        }
    };

    let (parsed, diagnostics) = parse(&text).map_err(|source| Error::Script {
        label: label.clone(),
        source,
    })?;
    if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&text)
                .path(&label)
                .colored(args.color)
                .render()
        );
    }

    Ok(parsed
        .printer()
        .with_trivia(args.raw)
        .with_spans(args.spans)
        .dump())
}

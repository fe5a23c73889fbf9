use std::path::PathBuf;

use typebridge_compiler::{Error, Result};
use typebridge_core::ExternalType;
use typebridge_script::extract_source;

use super::inputs::{collect_files, label, read_file};

pub struct ExtractArgs {
    pub sources: Vec<PathBuf>,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: ExtractArgs) {
    match execute(&args) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Extracted types of every source as a JSON array.
pub fn execute(args: &ExtractArgs) -> Result<String> {
    let mut types: Vec<ExternalType> = Vec::new();
    for path in collect_files(&args.sources, "ts")? {
        let text = read_file(&path)?;
        let label = label(&path);
        let (extracted, diagnostics) = extract_source(&text, &label).map_err(|source| Error::Script {
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
        types.extend(extracted);
    }

    let json = if args.compact {
        serde_json::to_string(&types)
    } else {
        serde_json::to_string_pretty(&types)
    };
    json.map_err(|source| Error::Json {
        label: "extracted types".to_string(),
        source,
    })
}

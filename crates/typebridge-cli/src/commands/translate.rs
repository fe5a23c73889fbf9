use std::path::PathBuf;

use typebridge_compiler::{Result, Scope, Translator, Worklist};

use super::inputs::{ModelInputs, load_config, load_model};

pub struct TranslateArgs {
    pub signature: String,
    pub namespace: String,
    pub runtime: bool,
    pub inputs: ModelInputs,
    pub config: Option<PathBuf>,
    pub color: bool,
}

/// A translated signature and the model types it would pull into the
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub rendered: String,
    pub discovered: Vec<String>,
}

pub fn run(args: TranslateArgs) {
    match execute(&args) {
        Ok(translation) => {
            println!("{}", translation.rendered);
            for name in &translation.discovered {
                eprintln!("discovered: {}", name);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

pub fn execute(args: &TranslateArgs) -> Result<Translation> {
    let config = load_config(args.config.as_deref())?;
    let model = load_model(&args.inputs, args.color)?;

    let mut worklist = Worklist::new();
    let rendered = {
        let mut translator = Translator::new(&model, &config, &config, &mut worklist);
        let scope = Scope::new(&args.namespace);
        if args.runtime {
            translator.runtime_text(&args.signature, &scope)
        } else {
            translator.script(&args.signature, &scope, "any")
        }
    };

    Ok(Translation {
        rendered: rendered.to_string(),
        discovered: worklist.iter().map(str::to_string).collect(),
    })
}

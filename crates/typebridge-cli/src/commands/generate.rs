use std::path::{Path, PathBuf};

use tracing::info;
use typebridge_compiler::{Error, GeneratedOutput, Generator, Result};

use super::inputs::{ModelInputs, load_config, load_model};

pub struct GenerateArgs {
    pub inputs: ModelInputs,
    pub config: Option<PathBuf>,
    pub seeds: Vec<String>,
    pub output: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    if args.inputs.is_empty() {
        eprintln!("error: no inputs; pass --server, --script or --source");
        std::process::exit(1);
    }
    if let Err(err) = execute(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

pub fn execute(args: &GenerateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let model = load_model(&args.inputs, args.color)?;

    let generator = Generator::new(&model, &config);
    let output = if args.seeds.is_empty() {
        generator.generate()?
    } else {
        generator.generate_from(&args.seeds)?
    };

    match (&args.out_dir, &args.output) {
        (Some(dir), _) => write_files(&output, dir),
        (None, Some(file)) => write(file, &output.render()),
        (None, None) => {
            print!("{}", output.render());
            Ok(())
        }
    }
}

/// One file per namespace under `dir`.
pub fn write_files(output: &GeneratedOutput, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for (name, text) in output.files() {
        write(&dir.join(name), &text)?;
    }
    Ok(())
}

fn write(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "written");
    Ok(())
}

//! Loading metadata dumps, TypeScript sources and configuration from disk.

use std::path::{Path, PathBuf};

use tracing::info;
use typebridge_compiler::{Config, Error, ModelBuilder, Result};
use typebridge_core::TypeModel;
use walkdir::WalkDir;

/// Input paths for each pipeline. Directories are walked recursively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelInputs {
    pub server: Vec<PathBuf>,
    pub script: Vec<PathBuf>,
    pub source: Vec<PathBuf>,
}

impl ModelInputs {
    pub fn is_empty(&self) -> bool {
        self.server.is_empty() && self.script.is_empty() && self.source.is_empty()
    }
}

/// Files under `paths` with the given extension, in path order per root.
/// Paths naming a file are taken as they are.
pub fn collect_files(paths: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|err| Error::Io {
                path: err.path().unwrap_or(root.as_path()).to_path_buf(),
                source: err.into(),
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == extension)
            {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Build one model from every input. Source syntax errors are printed to
/// stderr and do not stop the run.
pub fn load_model(inputs: &ModelInputs, color: bool) -> Result<TypeModel> {
    let mut builder = ModelBuilder::new();

    for path in collect_files(&inputs.server, "json")? {
        builder.add_server_json(&label(&path), &read_file(&path)?)?;
    }
    for path in collect_files(&inputs.script, "json")? {
        builder.add_runtime_json(&label(&path), &read_file(&path)?)?;
    }
    for path in collect_files(&inputs.source, "ts")? {
        let text = read_file(&path)?;
        let label = label(&path);
        let diagnostics = builder.add_source(&label, &text)?;
        if !diagnostics.is_empty() {
            eprint!(
                "{}",
                diagnostics
                    .printer()
                    .source(&text)
                    .path(&label)
                    .colored(color)
                    .render()
            );
        }
    }

    let model = builder.build();
    info!(types = model.len(), "model loaded");
    Ok(model)
}

/// Display label of an input file.
pub fn label(path: &Path) -> String {
    path.display().to_string()
}

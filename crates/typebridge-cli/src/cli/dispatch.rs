//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::cst::CstArgs;
use crate::commands::extract::ExtractArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::inputs::ModelInputs;
use crate::commands::translate::TranslateArgs;

pub struct GenerateParams {
    pub inputs: ModelInputs,
    pub config: Option<PathBuf>,
    pub seeds: Vec<String>,
    pub output: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: model_inputs(m),
            config: m.get_one::<PathBuf>("config").cloned(),
            seeds: many::<String>(m, "seed"),
            output: m.get_one::<PathBuf>("output").cloned(),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            inputs: p.inputs,
            config: p.config,
            seeds: p.seeds,
            output: p.output,
            out_dir: p.out_dir,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExtractParams {
    pub sources: Vec<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExtractParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            sources: many::<PathBuf>(m, "sources"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExtractParams> for ExtractArgs {
    fn from(p: ExtractParams) -> Self {
        Self {
            sources: p.sources,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TranslateParams {
    pub signature: String,
    pub namespace: String,
    pub runtime: bool,
    pub inputs: ModelInputs,
    pub config: Option<PathBuf>,
    pub color: ColorChoice,
}

impl TranslateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            signature: m.get_one::<String>("signature").cloned().unwrap_or_default(),
            namespace: m.get_one::<String>("namespace").cloned().unwrap_or_default(),
            runtime: m.get_flag("runtime"),
            inputs: model_inputs(m),
            config: m.get_one::<PathBuf>("config").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TranslateParams> for TranslateArgs {
    fn from(p: TranslateParams) -> Self {
        Self {
            signature: p.signature,
            namespace: p.namespace,
            runtime: p.runtime,
            inputs: p.inputs,
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CstParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl CstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<CstParams> for CstArgs {
    fn from(p: CstParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            raw: p.raw,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

/// Number of `-v` flags given anywhere on the command line.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

fn model_inputs(m: &ArgMatches) -> ModelInputs {
    ModelInputs {
        server: many::<PathBuf>(m, "server"),
        script: many::<PathBuf>(m, "script"),
        source: many::<PathBuf>(m, "source"),
    }
}

fn many<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> Vec<T> {
    m.get_many::<T>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

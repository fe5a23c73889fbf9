#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;
mod logging;

use cli::{CstParams, ExtractParams, GenerateParams, TranslateParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            logging::init(verbosity(m));
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("extract", m)) => {
            logging::init(verbosity(m));
            let params = ExtractParams::from_matches(m);
            commands::extract::run(params.into());
        }
        Some(("translate", m)) => {
            logging::init(verbosity(m));
            let params = TranslateParams::from_matches(m);
            commands::translate::run(params.into());
        }
        Some(("cst", m)) => {
            logging::init(verbosity(m));
            let params = CstParams::from_matches(m);
            commands::cst::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Server metadata dump or directory of dumps (--server, repeatable).
pub fn server_arg() -> Arg {
    Arg::new("server")
        .long("server")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("Server metadata JSON file or directory")
}

/// Script assembly dump or directory of dumps (--script, repeatable).
pub fn script_arg() -> Arg {
    Arg::new("script")
        .long("script")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("Script assembly metadata JSON file or directory")
}

/// TypeScript source file or directory (--source, repeatable).
pub fn source_arg() -> Arg {
    Arg::new("source")
        .long("source")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("TypeScript source file or directory")
}

/// TypeScript sources (positional, one or more).
pub fn sources_arg() -> Arg {
    Arg::new("sources")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .required(true)
        .help("TypeScript source files or directories")
}

/// Single TypeScript source file (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("TypeScript source file")
}

/// Inline source text (-s/--text).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Type signature to translate (positional).
pub fn signature_arg() -> Arg {
    Arg::new("signature")
        .value_name("SIGNATURE")
        .required(true)
        .help("Type signature, e.g. 'System.Collections.Generic.List`1<System.Int32>'")
}

/// Namespace the signature is referenced from (-n/--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .short('n')
        .long("namespace")
        .value_name("NAMESPACE")
        .help("Namespace the type is referenced from")
}

/// Use server translation rules (--runtime).
pub fn runtime_arg() -> Arg {
    Arg::new("runtime")
        .long("runtime")
        .action(ArgAction::SetTrue)
        .help("Translate with server rules instead of script rules")
}

/// Configuration file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (typebridge.toml)")
}

/// Seed type by full name (--seed, repeatable).
pub fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_name("TYPE")
        .action(ArgAction::Append)
        .help("Emit only this type and what it references (default: all enums, services, entities and script types)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Write one file per namespace (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("output")
        .help("Write one file per namespace into DIR")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Include trivia tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comment tokens")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log progress to stderr (-vv for every declaration)")
}

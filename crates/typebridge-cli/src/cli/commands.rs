//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typebridge")
        .about("TypeScript declarations from server and script type metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(extract_command())
        .subcommand(translate_command())
        .subcommand(cst_command())
}

/// Generate declarations for every reachable type.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript declarations")
        .override_usage(
            "\
  typebridge generate --server <PATH> [--script <PATH>] [--source <PATH>] [-o <FILE>]
  typebridge generate --server <PATH> --out-dir <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  typebridge generate --server App.json                    # all declarations to stdout
  typebridge generate --server dumps/ --source scripts/    # walk directories
  typebridge generate --server App.json --out-dir out/     # one file per namespace
  typebridge generate --server App.json --seed App.OrderRow"#,
        )
        .arg(server_arg())
        .arg(script_arg())
        .arg(source_arg())
        .arg(config_arg())
        .arg(seed_arg())
        .arg(output_file_arg())
        .arg(out_dir_arg())
        .arg(color_arg())
}

/// Extract exported classes from TypeScript sources.
pub fn extract_command() -> Command {
    Command::new("extract")
        .about("Extract exported classes from TypeScript sources as JSON")
        .after_help(
            r#"EXAMPLES:
  typebridge extract app.ts              # pretty JSON
  typebridge extract scripts/ --compact  # every .ts file under scripts/"#,
        )
        .arg(sources_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Translate one type signature.
pub fn translate_command() -> Command {
    Command::new("translate")
        .about("Translate a type signature to a TypeScript type expression")
        .after_help(
            r#"EXAMPLES:
  typebridge translate 'System.Func`2<System.String, System.Int32>'
  typebridge translate --runtime 'System.Nullable`1<System.DateTime>'
  typebridge translate --runtime -n App --server App.json 'App.OrderRow[]'"#,
        )
        .arg(signature_arg())
        .arg(namespace_arg())
        .arg(runtime_arg())
        .arg(server_arg())
        .arg(script_arg())
        .arg(source_arg())
        .arg(config_arg())
        .arg(color_arg())
}

/// Show the concrete syntax tree of a TypeScript source.
pub fn cst_command() -> Command {
    Command::new("cst")
        .about("Show the syntax tree of a TypeScript source")
        .override_usage(
            "\
  typebridge cst <SOURCE>
  typebridge cst -s <TEXT>",
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

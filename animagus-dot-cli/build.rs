use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered by animagus-dot's FormatRegistry.
// Build scripts can't depend on the library crate's registry.
const AVAILABLE_FORMATS: &[&str] = &["dot", "json", "treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("animagus-dot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render an animagus AST file as a Graphviz digraph")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the serialized AST")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Path of the file to write")
                .required_unless_present("list-formats")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an animagus-dot.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        );

    generate_to(Bash, &mut cmd, "animagus-dot", &outdir)?;
    generate_to(Zsh, &mut cmd, "animagus-dot", &outdir)?;
    generate_to(Fish, &mut cmd, "animagus-dot", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}

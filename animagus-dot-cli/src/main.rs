// Command-line interface for animagus-dot
//
// Converts a compiled animagus AST (protobuf `Root`) into a Graphviz digraph,
// or into one of the other views provided by the animagus-dot library.
//
// Usage:
//  animagus-dot <input> <output> [--to <format>] [--config <path>]
//  animagus-dot --list-formats
//
// The output format is taken from --to, else detected from the output file
// extension, else the configured default (dot).
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Parameters that mirror a configuration key override that key.
// Example:
//  animagus-dot ast.bin ast.dot --extra-escape-labels
//  animagus-dot ast.bin ast.tree --extra-show-ids true

use animagus_dot::{FormatError, FormatRegistry};
use animagus_dot_config::{DotConfig, Loader, LOCAL_CONFIG_FILE};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, info};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following value is anything that does not look like a flag
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("animagus-dot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render an animagus AST file as a Graphviz digraph")
        .long_about(
            "animagus-dot reads a compiled animagus AST (protobuf) and writes a\n\
            Graphviz description of its calls, streams and value trees.\n\n\
            The graph root is labeled with the input file name, extension removed.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            animagus-dot ast.bin ast.dot                        # Graphviz output\n  \
            animagus-dot ast.bin ast.dot --extra-escape-labels  # Escape quotes in labels\n  \
            animagus-dot ast.bin ast.tree                       # Tree view (by extension)\n  \
            animagus-dot ast.bin out.txt --to json              # Decoded document as JSON\n  \
            dot -Tsvg ast.dot -o ast.svg                        # Render with Graphviz",
        )
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
                .help("Output format (detected from the output extension if not specified)")
                .long_help(
                    "Output format to write.\n\n\
                    If not specified, the format is detected from the output file extension\n\
                    (.dot/.gv, .tree/.treeviz, .json), falling back to the configured default.\n\
                    Use --list-formats to see all options.",
                )
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
        )
}

fn main() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if let Err(e) = handle_convert_command(&matches, &extra_params, &config) {
        eprintln!("Error: {e}");
        tracing::error!(error = %e, "conversion failed");
        std::process::exit(1);
    }
}

/// Decode the input, then stream the chosen rendering into the output file.
///
/// The format is resolved before any file is touched. The output file is only
/// created once the input decoded; a failing write leaves it partially written.
fn handle_convert_command(
    matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &DotConfig,
) -> Result<(), FormatError> {
    let (Some(input), Some(output)) = (
        matches.get_one::<String>("input"),
        matches.get_one::<String>("output"),
    ) else {
        return Err(FormatError::NotSupported(
            "both <input> and <output> are required".to_string(),
        ));
    };

    let registry = FormatRegistry::default();
    let format = registry.resolve(
        matches.get_one::<String>("to").map(|s| s.as_str()),
        output,
        &config.output.default_format,
    )?;
    let params = build_format_params(config, &format, extra_params);
    debug!(%format, ?params, "resolved output format");

    let doc = animagus_dot::load_path(input)?;
    let ast_name = animagus_dot::ast_name(input);

    let file = File::create(output).map_err(|e| FormatError::OutputCreate {
        path: output.clone(),
        message: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);
    registry.write_with_options(&doc, &ast_name, &format, &params, &mut writer)?;
    writer.flush()?;

    info!(path = %output, %format, "output written");
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {:<10} {} (.{})",
                name,
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DotConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Fold extras that mirror configuration keys into the config.
///
/// Consumed keys are removed from `extra_params`; the rest go to the format
/// untouched, which rejects the ones it does not know.
fn apply_config_overrides(config: &mut DotConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("escape-labels") {
        config.dot.escape_labels = parse_bool_arg("escape-labels", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["show-ids", "ids"]) {
        config.treeviz.show_ids = parse_bool_arg("show-ids", &raw);
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.json.pretty = parse_bool_arg("pretty", &raw);
    }
}

fn build_format_params(
    config: &DotConfig,
    format: &str,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = config.format_params(format);
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

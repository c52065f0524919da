use brackish::language::diagnostics::Diagnostics;
use brackish::language::fonts::StaticFontCatalog;
use brackish::{output, parsing, problem, rendering};
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("brackish")
        .version(VERSION)
        .propagate_version(true)
        .author("Brackish contributors")
        .about("The Brackish markup language.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Escalate error-class diagnostics into hard failures."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given markup and report diagnostics")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the markup you want to check."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given markup to an element tree")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["json", "html"])
                        .default_value("json")
                        .help("Output format for the element tree."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the markup you want to render."),
                ),
        )
        .get_matches();

    let strict = matches.get_flag("strict");

    match matches.subcommand() {
        Some(("check", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                check(Path::new(filename), strict);
            }
        }
        Some(("render", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let format = submatches
                    .get_one::<String>("format")
                    .map(String::as_str)
                    .unwrap_or("json");
                render(Path::new(filename), format, strict);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: brackish [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// The fonts the command line pretends to have; a real host would supply its
/// own catalog.
fn default_catalog() -> StaticFontCatalog {
    StaticFontCatalog::new()
        .register("Pictoglyph", "sans-serif")
        .register("Inconsolata", "monospace")
}

fn sink(strict: bool) -> Diagnostics {
    if strict {
        Diagnostics::strict()
    } else {
        Diagnostics::new()
    }
}

fn check(filename: &Path, strict: bool) {
    let content = load(filename);
    let catalog = default_catalog();
    let mut diagnostics = sink(strict);

    match rendering::render(&content, Some(&catalog), &mut diagnostics) {
        Ok(nodes) => {
            println!(
                "{} node{}, {} warning{}, {} error{}",
                nodes.len(),
                if nodes.len() == 1 { "" } else { "s" },
                diagnostics.warnings(),
                if diagnostics.warnings() == 1 { "" } else { "s" },
                diagnostics.errors(),
                if diagnostics.errors() == 1 { "" } else { "s" },
            );
            if diagnostics.errors() > 0 {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{}", problem::concise_markup_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn render(filename: &Path, format: &str, strict: bool) {
    let content = load(filename);
    let catalog = default_catalog();
    let mut diagnostics = sink(strict);

    match rendering::render(&content, Some(&catalog), &mut diagnostics) {
        Ok(nodes) => match format {
            "html" => {
                let body = rendering::html::to_html(&nodes);
                let title = filename
                    .file_stem()
                    .map(|stem| {
                        stem.to_string_lossy()
                            .to_string()
                    })
                    .unwrap_or_else(|| "brackish".to_string());
                print!("{}", output::html_page(&title, &body));
            }
            _ => {
                println!("{}", output::json(&nodes));
            }
        },
        Err(error) => {
            eprintln!("{}", problem::concise_markup_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn load(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

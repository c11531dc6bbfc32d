//! Command-line interface for hilite
//! This binary highlights a code snippet (file or stdin) and prints the result as HTML, as a
//! decorated code block, or as a JSON token dump.
//!
//! Usage:
//!   hilite `[path]` [--lang `<lang>`] [--format html|block|tokens] [--config `<file>`]
//!   hilite --list-languages                              - List the languages and their aliases

use clap::{Arg, ArgAction, ArgMatches, Command};
use hilite::{CodeBlock, LanguageRegistry, Syntax};
use hilite_config::{ConfigError, HiliteConfig, Loader};
use log::debug;
use std::io::{self, Read};
use std::path::Path;

fn build_cli() -> Command {
    Command::new("hilite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax highlight code snippets into token-classed HTML")
        .arg(
            Arg::new("path")
                .help("File to highlight ('-' or absent for stdin)")
                .index(1),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help("Language (e.g., 'js', 'python', 'yml'); inferred from the file extension if absent"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: html, block, tokens (default: html, or block if render.wrap_block is set)")
                .value_parser(["html", "block", "tokens"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("class-prefix")
                .long("class-prefix")
                .help("Class emitted before every kind class (overrides render.class_prefix)"),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List available languages and their aliases")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let registry = config.registry().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("list-languages") {
        handle_list_languages_command(&registry);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let language = matches
        .get_one::<String>("lang")
        .cloned()
        .unwrap_or_else(|| infer_language(path, &registry, &config));
    let format = match matches.get_one::<String>("format") {
        Some(format) => format.as_str(),
        None if config.render.wrap_block => "block",
        None => "html",
    };

    handle_highlight_command(path, &language, format, &registry, &config);
}

fn load_config(matches: &ArgMatches) -> Result<HiliteConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(prefix) = matches.get_one::<String>("class-prefix") {
        loader = loader.set_override("render.class_prefix", prefix.as_str())?;
    }
    loader.build()
}

/// Use the file extension when it names a known language, the configured default otherwise.
fn infer_language(path: &str, registry: &LanguageRegistry, config: &HiliteConfig) -> String {
    let inferred = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| registry.has(ext))
        .map(|ext| registry.normalize(ext));
    match inferred {
        Some(language) => {
            debug!("inferred language '{}' from {}", language, path);
            language
        }
        None => config.input.default_language.clone(),
    }
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the highlight command
fn handle_highlight_command(
    path: &str,
    language: &str,
    format: &str,
    registry: &LanguageRegistry,
    config: &HiliteConfig,
) {
    let raw = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    let code = if config.input.trim { raw.trim() } else { raw.as_str() };
    let options = config.render_options();

    let formatted = match format {
        "html" => registry.highlight(code, language).render(&options),
        "block" => CodeBlock::new(language, code).render(registry, &options),
        "tokens" => {
            let highlighted = registry.highlight(code, language);
            let dump = serde_json::json!({
                "language": highlighted.language(),
                "tokens": highlighted.token_views(),
            });
            serde_json::to_string_pretty(&dump).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            })
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: html, block, tokens");
            std::process::exit(1);
        }
    };

    println!("{}", formatted);
}

/// Handle the list-languages command
fn handle_list_languages_command(registry: &LanguageRegistry) {
    println!("Available languages:\n");

    for name in registry.list_languages() {
        println!("  {}", name);
        if let Ok(syntax) = registry.get(&name) {
            if !syntax.description().is_empty() {
                println!("    {}", syntax.description());
            }
        }
        let aliases = registry.aliases_for(&name);
        if !aliases.is_empty() {
            println!("    aliases: {}", aliases.join(", "));
        }
        println!();
    }
}

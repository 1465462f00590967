use std::env;
use std::path::PathBuf;
use std::sync::mpsc;

use log::LevelFilter;

use aisle_client::http::HttpCatalogApi;
use aisle_core::config::Config;
use aisle_core::state::ShopState;

mod logger;
mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct BrowseArgs {
    base_url: Option<String>,
    config: Option<PathBuf>,
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Browse(BrowseArgs),
    Help,
    Version,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match parse_args(env::args().skip(1).collect())? {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("aisle {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Browse(args) => browse(args),
    }
}

fn parse_args(args: Vec<String>) -> Result<Command, Box<dyn std::error::Error>> {
    let mut browse = BrowseArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--version" | "-V" | "version" => return Ok(Command::Version),
            "--base-url" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--base-url requires a URL".into());
                };
                browse.base_url = Some(value.clone());
                i += 2;
            }
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--config requires a path".into());
                };
                browse.config = Some(PathBuf::from(value));
                i += 2;
            }
            "--verbose" | "-v" => {
                browse.verbose = true;
                i += 1;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(Command::Browse(browse))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aisle").join("config.toml"))
}

fn browse(args: BrowseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match args.config.or_else(default_config_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    if let Some(base_url) = args.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }

    let api = HttpCatalogApi::from_config(&config.api)?;
    let state = ShopState::new(&config);

    let (tx, rx) = mpsc::channel();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::install(tx.clone(), level)?;
    log::info!("using service at {}", config.api.base_url);

    ui::run(state, api, tx, rx)
}

fn print_help() {
    println!("aisle {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  aisle [--base-url URL] [--config PATH] [--verbose]");
    println!("  aisle --help");
    println!("  aisle --version");
    println!();
    println!("Config is read from <config dir>/aisle/config.toml when present.");
}

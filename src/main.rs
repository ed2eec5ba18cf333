mod api;
mod app;
mod cli;
mod config;
mod consts;
mod endpoints;
mod error;
mod home;
mod output;
mod pricing;
mod store;
mod utils;

use clap::Parser;

use api::GatewayClient;
use app::{CommandContext, run_command};
use cli::Cli;
use config::Config;
use store::{FileStore, MemoryStore, Store};
use utils::{debug_enabled, set_debug};

fn open_store(quiet: bool) -> Box<dyn Store> {
    match FileStore::default_path() {
        Some(path) => {
            let store = FileStore::open(path);
            if debug_enabled() {
                eprintln!("[DEBUG] store at {}", store.path().display());
            }
            Box::new(store)
        }
        None => {
            if !quiet {
                eprintln!("Warning: no home directory; nothing will be stored");
            }
            Box::new(MemoryStore::default())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    // JSON consumers get clean stderr too
    let quiet = cli.json;
    let config = if quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let gateway = match GatewayClient::new(cli.server(), cli.timeout()) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut store = open_store(quiet);

    let command = cli.command.clone().unwrap_or_default();
    let ctx = CommandContext {
        cli: &cli,
        gateway: &gateway,
        quiet,
    };
    if let Err(e) = run_command(command, &ctx, store.as_mut()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

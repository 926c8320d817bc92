mod app;
mod cli;
mod clients;
mod config;
mod consts;
mod core;
mod credentials;
mod dashboard;
mod error;
mod history;
mod output;
mod report;
mod session;
mod share;
mod utils;

use clap::Parser;

use app::{CommandContext, handle_list, handle_report, handle_session, make_transport};
use cli::{Cli, Commands};
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Some(Commands::List) = &cli.command {
        handle_list(cli.json);
        return;
    }

    let transport = make_transport(cli.offline);
    let ctx = match CommandContext::new(&cli, transport.as_ref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match &cli.command {
        Some(Commands::Session) => {
            if let Err(e) = handle_session(ctx) {
                eprintln!("Session failed: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Report { done }) => handle_report(&ctx, done),
        // Report is the default
        Some(Commands::List) | None => handle_report(&ctx, &[]),
    }
}

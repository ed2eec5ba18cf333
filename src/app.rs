use std::io::Write;

use chrono::Local;

use crate::api::Gateway;
use crate::cli::{Cli, Commands};
use crate::endpoints::{API_ENDPOINTS, EndpointCarousel, ROTATE_INTERVAL};
use crate::error::AppError;
use crate::home::{dismiss_notice, load_home_page, pending_notice};
use crate::output::{
    PricingTableOptions, output_endpoints_json, output_home_json, output_notice_json,
    output_pricing_json, print_home_page, print_notice, print_pricing_table,
};
use crate::pricing::load_pricing;
use crate::store::Store;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) gateway: &'a dyn Gateway,
    pub(crate) quiet: bool,
}

fn handle_pricing(ctx: &CommandContext<'_>, store: &mut dyn Store) -> Result<(), AppError> {
    let sheet = load_pricing(
        ctx.gateway,
        store,
        ctx.cli.offline,
        ctx.cli.price_policy(),
        ctx.quiet,
    )?;
    if ctx.cli.json {
        println!("{}", output_pricing_json(&sheet)?);
    } else {
        print_pricing_table(
            &sheet,
            PricingTableOptions {
                use_color: ctx.cli.use_color(),
            },
        );
    }
    Ok(())
}

fn handle_home(ctx: &CommandContext<'_>, store: &mut dyn Store) -> Result<(), AppError> {
    let page = load_home_page(ctx.gateway, store, ctx.quiet)?;
    if ctx.cli.json {
        println!("{}", output_home_json(&page)?);
    } else {
        let carousel = EndpointCarousel::new(API_ENDPOINTS);
        print_home_page(&page, ctx.gateway.server_address(), carousel.current());
    }
    Ok(())
}

fn handle_notice(
    ctx: &CommandContext<'_>,
    store: &mut dyn Store,
    dismiss: bool,
) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    if dismiss {
        dismiss_notice(store, today)?;
        if !ctx.quiet {
            eprintln!("Notice dismissed for {today}");
        }
        return Ok(());
    }

    let notice = pending_notice(ctx.gateway, store, today, ctx.quiet)?;
    if ctx.cli.json {
        println!("{}", output_notice_json(notice.as_deref())?);
    } else {
        print_notice(notice.as_deref());
    }
    Ok(())
}

fn handle_endpoints(
    ctx: &CommandContext<'_>,
    watch: bool,
    cycles: usize,
    start: usize,
) -> Result<(), AppError> {
    let server = ctx.gateway.server_address();
    if ctx.cli.json {
        println!("{}", output_endpoints_json(server, API_ENDPOINTS)?);
        return Ok(());
    }
    if !watch {
        for path in API_ENDPOINTS {
            println!("{server}{path}");
        }
        return Ok(());
    }

    let mut carousel = EndpointCarousel::new(API_ENDPOINTS);
    let mut stdout = std::io::stdout();
    let mut current = carousel.select(start);
    for step in 0..cycles {
        if let Some(path) = current {
            print!("\r\x1b[2K{server}{path}");
            let _ = stdout.flush();
        }
        if step + 1 < cycles {
            std::thread::sleep(ROTATE_INTERVAL);
            current = carousel.advance();
        }
    }
    println!();
    Ok(())
}

/// Dispatch a parsed command
pub(crate) fn run_command(
    command: Commands,
    ctx: &CommandContext<'_>,
    store: &mut dyn Store,
) -> Result<(), AppError> {
    match command {
        Commands::Pricing => handle_pricing(ctx, store),
        Commands::Home => handle_home(ctx, store),
        Commands::Notice { dismiss } => handle_notice(ctx, store, dismiss),
        Commands::Endpoints {
            watch,
            cycles,
            start,
        } => handle_endpoints(ctx, watch, cycles, start),
    }
}

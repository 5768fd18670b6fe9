mod args;
mod cli;
mod config;
mod explain;

use anyhow::{Context, Result, bail};
use bracefmt::BoundedString;
use clap::Parser;
use colored::*;

use crate::cli::Cli;
use crate::config::{Config, Settings};

fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, &cli);
    if settings.capacity == Some(0) {
        bail!("Output capacity must be at least 1 byte");
    }

    if !settings.color {
        colored::control::set_override(false);
    }

    let args = args::parse_arguments(&cli.args);
    log::debug!(
        "Formatting {:?} with {} argument(s), strict={}",
        cli.template,
        args.len(),
        settings.options.strict
    );

    if cli.explain {
        explain::print_explanation(&explain::explain(&cli.template, &args));
        return Ok(());
    }

    let output = bracefmt::try_format(&cli.template, &args, &settings.options)
        .context("Failed to format template")?;

    match settings.capacity {
        Some(capacity) => {
            let bounded = BoundedString::from_text(&output, capacity);
            if bounded.is_truncated() {
                log::warn!(
                    "Output truncated to {} of {} bytes",
                    bounded.len(),
                    output.len()
                );
            }
            println!("{}", bounded);
        }
        None => println!("{}", output),
    }

    Ok(())
}

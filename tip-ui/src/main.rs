use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use tip_core::{FormField, FormState, ServiceRating};
use tip_ui::{AppConfig, Session, logging, views};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Split a bill and its tip between a party.
#[derive(Debug, Parser)]
#[command(name = "tip-calc", version, about)]
struct Cli {
    /// TOML config file (currency code, maximum tip percentage).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,tip_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Hide log output on stderr.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Calculate one split and print it.
    Split(SplitArgs),
    /// Fill in the form interactively, one command per line.
    Interactive,
    /// List the service ratings usable with `--rating` and `rate`.
    Ratings,
}

#[derive(Debug, Args)]
struct SplitArgs {
    /// Bill amount before tip.
    #[arg(long)]
    bill: String,

    /// Number of people sharing the bill.
    #[arg(long)]
    people: String,

    /// Tip percentage.
    #[arg(long, conflicts_with = "rating", required_unless_present = "rating")]
    tip: Option<String>,

    /// Service rating to pick the tip from (outstanding, good, ok, bad, terrible).
    #[arg(long, value_parser = parse_rating)]
    rating: Option<ServiceRating>,

    /// Print the unrounded result as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_rating(s: &str) -> Result<ServiceRating, String> {
    ServiceRating::parse(s).ok_or_else(|| format!("unknown service rating '{s}'"))
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_split(
    args: SplitArgs,
    config: &AppConfig,
) -> Result<()> {
    let mut form = FormState::new(config.validator());
    form.on_field_change(FormField::BillAmount, args.bill);
    form.on_field_change(FormField::PartySize, args.people);
    match (args.tip, args.rating) {
        (_, Some(rating)) => form.on_quick_pick(rating),
        (Some(tip), None) => form.on_field_change(FormField::TipPercent, tip),
        (None, None) => {}
    }

    let result = form.on_calculate()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", views::render_result(&result, &config.currency_code));
    }
    Ok(())
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal().then_some("> ");
    Session::new(config).run(stdin.lock(), io::stdout().lock(), prompt)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        CliCommand::Split(args) => run_split(args, &config),
        CliCommand::Interactive => run_interactive(&config),
        CliCommand::Ratings => {
            print!("{}", views::render_ratings());
            Ok(())
        }
    }
}

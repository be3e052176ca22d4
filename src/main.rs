mod commands;
mod logger;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use checkin_core::config::PickerConfig;
use checkin_core::{CalendarDate, Locale};
use clap::{Parser, Subcommand};

use commands::Settings;

#[derive(Parser)]
#[command(name = "checkin")]
#[command(about = "Pick hotel check-in and check-out dates")]
struct Cli {
    /// Log picker activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display language (zh-CN or en-US), overriding the config file
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Pad the month grid to six full weeks
    #[arg(long, global = true)]
    pad: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a stay interactively and print it as "START END"
    Pick {
        /// Current check-in date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,

        /// Current check-out date (YYYY-MM-DD), defaults to the day after check-in
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Show one month of the calendar
    Month {
        /// Month to show (YYYY-MM), defaults to the month of --start or today
        #[arg(short, long)]
        month: Option<String>,

        /// Check-in date to highlight (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Check-out date to highlight (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Count the nights between two dates
    Nights { start: String, end: String },
    /// Show how a date is labelled relative to today
    Label { date: String },
    /// List hotels for a stay
    Hotels {
        /// Check-in date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,

        /// Check-out date (YYYY-MM-DD), defaults to the day after check-in
        #[arg(short, long)]
        end: Option<String>,

        /// Where to stay
        #[arg(short, long)]
        location: Option<String>,

        /// JSON file of hotel records, overriding hotels_file in the config
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a commented default config file
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Show the config path and current settings
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let settings = || load_settings(cli.locale, cli.pad);
    let today = || resolve_today(cli.today.as_deref());

    match cli.command {
        Commands::Pick { start, end } => commands::pick::run(start, end, today()?, &settings()?),
        Commands::Month { month, start, end } => {
            commands::month::run(month, start, end, today()?, &settings()?)
        }
        Commands::Nights { start, end } => commands::dates::nights(&start, &end),
        Commands::Label { date } => commands::dates::label(&date, today()?, &settings()?),
        Commands::Hotels {
            start,
            end,
            location,
            file,
        } => commands::hotels::run(start, end, location, file, today()?, &settings()?),
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Show => commands::config::show(),
        },
    }
}

fn load_settings(locale: Option<Locale>, pad: bool) -> Result<Settings> {
    let mut config = PickerConfig::load().context("Could not load config")?;

    if let Some(locale) = locale {
        config.locale = locale;
    }
    if pad {
        config.pad_grid = true;
    }

    let layout = config.grid_layout();
    log::debug!("locale {}, layout {:?}", config.locale, layout);

    Ok(Settings {
        locale: config.locale,
        layout,
        hotels_file: config.hotels_file,
    })
}

fn resolve_today(arg: Option<&str>) -> Result<CalendarDate> {
    match arg {
        Some(s) => Ok(CalendarDate::parse(s)?),
        None => Ok(chrono::Local::now().date_naive().into()),
    }
}

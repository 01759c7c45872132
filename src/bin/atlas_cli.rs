//! Terminal front end for the country browser.
//!
//! Examples:
//!   atlas-cli list
//!   atlas-cli list --search fra --region europe
//!   atlas-cli show peru
//!   atlas-cli show "C%C3%B4te%20d'Ivoire"
//!   atlas-cli route /country/United%20States
//!   atlas-cli --json --grouping international show Brazil
//!
//! Uses the bundled dataset unless `--data` (or `data_path` in the config
//! file) points at another one.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use atlas::app::{AppEvent, AppState, View};
use atlas::card::CountryCard;
use atlas::config::AppConfig;
use atlas::detail::{BorderLink, DetailView};
use atlas::filter::Region;
use atlas::format::Grouping;
use atlas::route::Route;

#[derive(Parser, Debug)]
#[command(name = "atlas-cli", version, about = "Where in the world? Country browser")]
struct Cli {
    /// Config file (JSON); falls back to $ATLAS_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dataset file to use instead of the bundled one
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Population digit grouping: indian | international
    #[arg(long, global = true, value_parser = parse_grouping)]
    grouping: Option<Grouping>,
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    /// More log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries, optionally filtered
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        region: Option<Region>,
    },
    /// Show one country by common name (raw or percent-encoded)
    Show { name: String },
    /// Render whatever view a URL path resolves to
    Route { path: String },
    /// List the selectable regions
    Regions,
}

fn parse_grouping(v: &str) -> Result<Grouping, String> {
    Grouping::parse(v).ok_or_else(|| format!("unknown grouping {v:?} (indian | international)"))
}

fn init_logging(cfg: &AppConfig, verbose: u8) {
    let base = cfg.log_level.filter();
    let level = match verbose {
        0 => base,
        1 => base.max(LevelFilter::INFO),
        2 => base.max(LevelFilter::DEBUG),
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| format!("serialize: {e}"))?;
    println!("{out}");
    Ok(())
}

fn print_cards(cards: &[CountryCard]) {
    if cards.is_empty() {
        println!("(no countries match)");
        return;
    }
    for c in cards {
        println!(
            "{:<28} population={:<16} region={:<10} capital={}",
            c.name, c.population, c.region, c.capital
        );
    }
    println!("{} countries", cards.len());
}

fn print_detail(detail: &DetailView) {
    let d = match detail {
        DetailView::Found(d) => d,
        DetailView::NotFound { query } => {
            println!("{}", DetailView::NOT_FOUND_TITLE);
            println!("{}", DetailView::not_found_message(query));
            println!("(back: /)");
            return;
        }
    };

    println!("{}", d.name);
    println!("  Native Name:      {}", d.native_name);
    println!("  Population:       {}", d.population);
    println!("  Region:           {}", d.region);
    println!("  Sub Region:       {}", d.subregion);
    println!("  Capital:          {}", d.capital);
    println!("  Top Level Domain: {}", d.top_level_domain);
    println!("  Currencies:       {}", d.currencies);
    println!("  Languages:        {}", d.languages);
    println!("  Flag:             {}", d.flag);

    if !d.borders.is_empty() {
        println!("  Border Countries:");
        for b in &d.borders {
            match b {
                BorderLink::Country { name, href, .. } => println!("    {name:<24} -> {href}"),
                BorderLink::Unresolved { code } => println!("    {code}"),
            }
        }
    }
}

fn print_view(view: &View, json: bool) -> Result<(), String> {
    if json {
        return print_json(view);
    }
    match view {
        View::List { cards } => print_cards(cards),
        View::Detail { detail } => print_detail(detail),
    }
    Ok(())
}

fn print_regions(json: bool) -> Result<(), String> {
    if json {
        return print_json(&Region::all());
    }
    for r in Region::all() {
        println!("{r}");
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<AppConfig, String> {
    let mut cfg = AppConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(data) = &cli.data {
        cfg.data_path = Some(data.clone());
    }
    if let Some(grouping) = cli.grouping {
        cfg.grouping = grouping;
    }
    Ok(cfg)
}

fn run(cli: Cli, cfg: &AppConfig) -> Result<(), String> {
    // Resolved before the dataset is loaded; `regions` needs no data.
    let events = match cli.command {
        Command::List { search, region } => vec![
            AppEvent::SearchChanged(search),
            AppEvent::RegionChanged(region),
        ],
        Command::Show { name } => {
            // Accept both raw names and already-encoded segments.
            let segment = if name.contains('%') {
                name
            } else {
                atlas::route::encode_component(&name)
            };
            vec![AppEvent::Navigate(Route::Detail { segment })]
        }
        Command::Route { path } => vec![AppEvent::Navigate(Route::parse(&path))],
        Command::Regions => return print_regions(cli.json),
    };

    let dataset = cfg.load_dataset().map_err(|e| e.to_string())?;
    tracing::info!(records = dataset.len(), "dataset ready");
    let mut app = AppState::new(Arc::new(dataset), cfg.grouping);
    for event in events {
        app.apply(event);
    }

    print_view(&app.view(), cli.json)
}

fn main() {
    let cli = Cli::parse();
    let result = load_config(&cli).and_then(|cfg| {
        init_logging(&cfg, cli.verbose);
        run(cli, &cfg)
    });
    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

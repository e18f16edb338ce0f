use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use champion_codex::config::DEFAULT_LOG_LEVEL;
use champion_codex::{AppConfig, BundledResolver, ChampionId, ChampionStore, Portrait, Resolver, TapMode};

#[derive(Debug, Parser)]
#[command(name = "champion-codex", version, about = "Browse the champion catalog")]
struct Cli {
    /// What selecting a list row does
    #[arg(long, value_enum, default_value_t = TapMode::OpenDetail, global = true)]
    tap: TapMode,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, env = "CHAMPION_CODEX_LOG", default_value = DEFAULT_LOG_LEVEL, global = true)]
    log_level: String,

    /// Write logs here while the terminal UI is running
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive list/detail browser (default)
    Browse {
        /// Open this champion's detail screen on start
        #[arg(long)]
        champion: Option<ChampionId>,
    },

    /// Print the resolved catalog
    Export {
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            tap_mode: self.tap,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Some(Command::Export { json }) => {
            init_logging(&config, false)?;
            run_export(json)?;
        }
        Some(Command::Browse { champion }) => {
            if champion.is_some() && config.tap_mode == TapMode::ToggleExpand {
                bail!("--champion opens the detail screen, which is not available with --tap expand");
            }
            init_logging(&config, true)?;
            run_ui_mode(&config, champion)?;
        }
        None => {
            init_logging(&config, true)?;
            run_ui_mode(&config, None)?;
        }
    }

    Ok(())
}

/// Browse mode logs only to a file so the alternate screen stays clean
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log filter '{}'", config.log_level))?;

    match (&config.log_file, tui) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, false) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        (None, true) => {}
    }

    Ok(())
}

#[derive(Serialize)]
struct ExportedChampion {
    id: ChampionId,
    name: String,
    title: String,
    description: String,
    portrait: Portrait,
}

fn run_export(json: bool) -> Result<()> {
    let store = ChampionStore::new();
    let resolver = BundledResolver::new()?;

    let exported: Vec<ExportedChampion> = store
        .all_champions()
        .iter()
        .map(|c| ExportedChampion {
            id: c.id,
            name: resolver.resolve_text(c.name),
            title: resolver.resolve_text(c.title),
            description: resolver.resolve_text(c.description),
            portrait: resolver.resolve_image(c.image),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&exported)?);
        return Ok(());
    }

    println!("📜 Champion Catalog ({} champions, locale {})", exported.len(), resolver.locale());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for champion in &exported {
        println!("{:>3}  {} {}", champion.id, champion.name, champion.title);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &AppConfig, champion: Option<ChampionId>) -> Result<()> {
    use champion_codex::{ui, App};

    let resolver = BundledResolver::new()?;
    let mut app = App::new(ChampionStore::new(), config);

    if let Some(id) = champion {
        app.open_champion(id);
    }

    ui::run_ui(&mut app, &resolver)?;

    println!("✅ Champion Codex closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &AppConfig, _champion: Option<ChampionId>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the catalog: champion-codex export");
    std::process::exit(1);
}

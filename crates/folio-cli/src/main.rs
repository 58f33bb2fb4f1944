//! Folio - the portfolio hero in a terminal
//!
//! Renders the scroll-highlight hero of the portfolio site:
//! - One hero line emphasized at a time, driven by scrolling
//! - Navigation bar, scroll progress and page sections
//! - A headless trace of the tracker's decisions

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use folio_core::hero::emoji::{emoji_count, emphasis_settle_time};
use folio_core::{paths, HeroConfig};

mod trace;
mod tui;

/// Folio - scroll-driven hero renderer
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Scroll through the portfolio hero in your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hero config file (defaults to ~/.folio/hero.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable scroll tracking and keep the last line emphasized
    #[arg(long, global = true)]
    reduced_motion: bool,

    /// Color palette (defaults to following the terminal background)
    #[arg(short, long, global = true, value_enum)]
    theme: Option<tui::ThemeMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive hero (default)
    Hero,

    /// Print the hero lines and their emoji
    Lines,

    /// Sweep the page and print the active line at each offset
    Trace {
        /// Scroll step in pixels
        #[arg(long, default_value_t = 50.0)]
        step: f64,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 1000.0)]
        viewport: f64,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tui::restore_terminal();
        original_hook(panic_info);
    }));

    // Log to a file; stdout belongs to the TUI and the trace output
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join("folio.log")) {
        Ok(file) => file,
        Err(_) => std::fs::File::create(null_device)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = HeroConfig::load(cli.config.as_deref()).context("Failed to load hero config")?;
    let reduced_motion = config.reduced_motion(cli.reduced_motion);

    match cli.command.unwrap_or(Commands::Hero) {
        Commands::Hero => {
            let mut app = tui::App::new(&config, reduced_motion, cli.theme)?;
            tracing::info!(
                theme = app.theme.name,
                reduced_motion,
                "Starting hero renderer"
            );
            app.run().await?;
        }
        Commands::Lines => {
            let lines = config.hero_lines()?;
            for line in &lines {
                println!(
                    "{:>2}  {}  ({} emoji, settles after {}ms)",
                    line.index,
                    line.content,
                    emoji_count(&line.content),
                    emphasis_settle_time(&line.content).as_millis()
                );
            }
        }
        Commands::Trace {
            step,
            viewport,
            json,
        } => {
            let rows = trace::run_trace(&config, reduced_motion, step, viewport)?;
            let stdout = std::io::stdout();
            trace::write_rows(&mut stdout.lock(), &rows, json)?;
        }
    }

    Ok(())
}

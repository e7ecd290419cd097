//! sitesearch - autocomplete and open sites from a curated directory.
//!
//! Terminal host for `sitesearch_core`: each subcommand builds a snapshot
//! from the configured directory (or the built-in list) and drives the
//! search box against it.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use sitesearch::client::DataSource;
use sitesearch::loader::{load_into, spawn_load};
use sitesearch::navigator::{BrowserNavigator, PrintNavigator};
use sitesearch::presenter::TextPresenter;
use sitesearch_core::config::parse_widget_config;
use sitesearch_core::resolve::resolve_url;
use sitesearch_core::{Navigator, SearchBox, SharedSnapshot, WidgetConfig};

#[derive(Parser)]
#[command(name = "sitesearch")]
#[command(about = "Autocomplete and open sites from a curated directory")]
#[command(version)]
struct Cli {
    /// Record directory: http(s) URL or path to a JSON file
    #[arg(long, global = true, env = "SITESEARCH_DATA_URL")]
    data: Option<String>,

    /// Widget config file (JSON)
    #[arg(long, global = true, env = "SITESEARCH_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum suggestions per query
    #[arg(long, global = true)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sites whose name starts with PREFIX
    Suggest {
        #[arg(value_name = "PREFIX")]
        prefix: String,
    },
    /// Print the URL that TEXT resolves to
    Resolve {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Resolve TEXT and open it in the default browser
    Open {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Interactive search box on stdin
    Repl {
        /// Print chosen URLs instead of opening them
        #[arg(long, default_value = "false")]
        print: bool,
    },
    /// Check version
    Version,
}

const REPL_HELP: &str = "\
type to search; empty line submits
  :down / :up   move selection
  :pick N       choose row N
  :esc          dismiss suggestions
  :blur/:focus  leave / return to the input
  :q            quit";

fn load_config(path: Option<&Path>) -> Result<WidgetConfig> {
    let Some(path) = path else {
        return Ok(WidgetConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_widget_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

/// Build the snapshot synchronously: the configured source, or the built-in list.
fn load_now(config: &WidgetConfig) -> Result<Arc<SharedSnapshot>> {
    let shared = Arc::new(SharedSnapshot::default());
    if let Some(location) = &config.data_url {
        let source = DataSource::from_location(location)?;
        load_into(&shared, &source);
    }
    Ok(shared)
}

fn run_repl<N: Navigator>(config: WidgetConfig, navigator: N) -> Result<()> {
    let shared = Arc::new(SharedSnapshot::default());
    if let Some(location) = &config.data_url {
        let source = DataSource::from_location(location)?;
        let _loader =
            spawn_load(Arc::clone(&shared), source).context("Failed to start directory load")?;
    }

    let mut search = SearchBox::new(shared, config, TextPresenter::new(io::stdout()), navigator);
    println!("{}", REPL_HELP);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let now = Instant::now();
        search.tick(now);

        match line.trim_end() {
            ":q" => break,
            ":down" => search.move_selection(1),
            ":up" => search.move_selection(-1),
            ":esc" => search.dismiss(),
            ":blur" => search.blur(now),
            ":focus" => search.focus(),
            "" => {
                search.submit();
            }
            cmd if cmd.starts_with(":pick") => {
                match cmd[":pick".len()..].trim().parse::<usize>() {
                    Ok(n) if n >= 1 => {
                        if search.pick(n - 1).is_none() {
                            warn!("no suggestion {}", n);
                        }
                    }
                    _ => warn!("usage: :pick N"),
                }
            }
            text => search.input(text),
        }
        io::stdout().flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.data.is_some() {
        config.data_url = cli.data;
    }
    if let Some(limit) = cli.limit {
        config.max_suggestions = limit;
    }

    match cli.command {
        Commands::Suggest { prefix } => {
            let snapshot = load_now(&config)?.current();
            for record in snapshot.query(&prefix, config.max_suggestions) {
                println!("{}\t{}", record.name, record.domain);
            }
        }
        Commands::Resolve { text } => {
            let snapshot = load_now(&config)?.current();
            if let Some(url) = resolve_url(&text, snapshot.store()) {
                println!("{}", url);
            }
        }
        Commands::Open { text } => {
            let snapshot = load_now(&config)?.current();
            match resolve_url(&text, snapshot.store()) {
                Some(url) => BrowserNavigator.navigate(&url),
                None => info!("Nothing to open"),
            }
        }
        Commands::Repl { print } => {
            if print {
                run_repl(config, PrintNavigator::new(io::stdout()))?;
            } else {
                run_repl(config, BrowserNavigator)?;
            }
        }
        Commands::Version => {
            println!("sitesearch {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

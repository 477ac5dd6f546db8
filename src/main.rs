use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use i3style::commands;
use i3style::config::loader;
use i3style::config::themes;
use i3style::config::types::Settings;

#[derive(Parser)]
#[command(name = "i3style", version, about = "Apply and extract i3 color themes")]
struct Cli {
    /// Path to the i3style settings file.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a theme to an i3 config.
    Apply {
        /// Theme file, or the name of a theme in the themes directory.
        #[arg(short, long)]
        theme: PathBuf,
        /// i3 config to read.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Where to write the new config (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List themes in the themes directory.
    List {
        /// Themes directory to list.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Extract the colors of an i3 config as a theme.
    Extract {
        /// i3 config to read.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Where to write the theme (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let settings = loader::load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::Apply {
            theme,
            config,
            output,
        } => {
            let dir = themes::themes_dir(None, &settings);
            let theme_path = themes::resolve_theme_path(&theme, dir.as_deref())
                .with_context(|| format!("theme {} not found", theme.display()))?;
            let config_path = i3_config_path(config.as_deref(), &settings)?;
            let merged = commands::apply(&theme_path, &config_path)?;
            commands::write_output(output.as_deref(), &merged)?;
        }
        Commands::List { dir } => {
            let dir = themes::themes_dir(dir.as_deref(), &settings);
            let listed = match dir.as_deref() {
                Some(dir) => themes::list_themes(dir)
                    .with_context(|| format!("listing {}", dir.display()))?,
                None => None,
            };
            match listed {
                Some(names) => {
                    for name in names {
                        println!(" - {name}");
                    }
                }
                None => println!("No available themes"),
            }
        }
        Commands::Extract { config, output } => {
            let config_path = i3_config_path(config.as_deref(), &settings)?;
            let theme = commands::extract(&config_path, &settings.defaults.meta)?;
            commands::write_output(output.as_deref(), &theme)?;
        }
    }

    Ok(())
}

fn i3_config_path(explicit: Option<&Path>, settings: &Settings) -> Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| settings.defaults.i3_config.clone())
        .context("no i3 config given; pass --config or set defaults.i3_config")
}

use anyhow::{Result, bail};
use biobasics_wiki_config::Config;
use biobasics_wiki_engine::WikiConverter;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

mod commands;

#[derive(Debug, Parser)]
#[command(
    name = "biobasics-wiki",
    version,
    about = "Convert BioBasics wiki articles into navigable HTML pages"
)]
struct Cli {
    /// Config file [default: ~/.config/biobasics-wiki/config.toml]
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a single article
    Convert(ConvertArgs),
    /// Convert every article under a wiki directory
    Build(BuildArgs),
    /// Print an article's title and table of contents
    Toc(TocArgs),
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Markdown article to convert
    input: PathBuf,
    /// Output file [default: INPUT with an .html extension]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Metadata file [default: the article's .meta.toml sidecar, if any]
    #[arg(long, value_name = "FILE")]
    meta: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Wiki directory [default: wiki_path from the config file]
    wiki_dir: Option<PathBuf>,
    /// Output directory [default: output_path from the config file, else WIKI_DIR]
    #[arg(short, long, value_name = "OUT_DIR")]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct TocArgs {
    /// Markdown article to index
    input: PathBuf,
    /// Print the outline as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let converter = WikiConverter::new(commands::page_options(&config));

    match cli.command {
        Commands::Convert(args) => {
            commands::convert_file(
                &converter,
                &args.input,
                args.output.as_deref(),
                args.meta.as_deref(),
            )?;
        }
        Commands::Build(args) => {
            let count = commands::build_wiki(
                &converter,
                &config,
                args.wiki_dir.as_deref(),
                args.output.as_deref(),
            )?;
            log::info!("Converted {count} articles");
        }
        Commands::Toc(args) => print!("{}", commands::toc(&args.input, args.json)?),
    }

    Ok(())
}

/// Loads the given config file, or the default one if it exists.
///
/// A missing default config is not an error; a missing explicit one is.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = explicit.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if explicit.is_some() => {
            bail!("Config file '{}' does not exist", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

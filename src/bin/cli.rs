//! docpack CLI
//!
//! Assembles pages fetched by an external crawler into one Markdown file.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use docpack::{
    error::{AppError, Result},
    models::{Config, PageResult},
    pipeline::ExportAssembler,
    services::FilenameGenerator,
    storage::{DocumentStorage, LocalStorage},
    utils::extract_url_from_query,
};

/// docpack - Documentation export bundler
#[derive(Parser, Debug)]
#[command(
    name = "docpack",
    version,
    about = "Bundle crawled documentation pages into a single Markdown file"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "docpack.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble crawled pages into one document
    Export {
        /// Documentation URL the crawl started from
        #[arg(long)]
        url: String,

        /// JSON file with an array of {"url", "content"} pages
        #[arg(long)]
        pages: PathBuf,

        /// Output directory (default: export.output_dir from config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Export date stamp, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Keep Markdown links
        #[arg(long)]
        keep_links: bool,

        /// Keep repeated paragraphs
        #[arg(long)]
        keep_duplicates: bool,

        /// Keep platform availability notices
        #[arg(long)]
        keep_availability: bool,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the file name an export of URL would get
    Filename {
        #[arg(long)]
        url: String,

        /// Date stamp, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Check whether a URL belongs to a supported documentation site
    Check {
        /// URL, optionally percent-encoded
        #[arg(long)]
        url: String,
    },

    /// List supported documentation sites
    Sites,

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Export {
            url,
            pages,
            output_dir,
            date,
            keep_links,
            keep_duplicates,
            keep_availability,
            stdout,
        } => {
            let assembler = ExportAssembler::from_config(&config)?;

            let mut options = config.export.filters;
            options.filter_urls &= !keep_links;
            options.deduplicate_content &= !keep_duplicates;
            options.filter_availability &= !keep_availability;

            if !assembler.classifier().is_valid(&url) {
                log::warn!("{} is not a supported documentation site", url);
            }

            let pages = PageResult::load_all(&pages)?;
            log::info!("Loaded {} pages", pages.len());

            let document = assembler.assemble(&url, &pages, &options, date.unwrap_or_else(today));

            if stdout {
                std::io::stdout().write_all(document.text.as_bytes())?;
            } else {
                let dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
                let path = LocalStorage::new(dir).save(&document)?;
                println!("{}", path.display());
            }
        }

        Command::Filename { url, date } => {
            let assembler = ExportAssembler::from_config(&config)?;
            let generator = FilenameGenerator::new(assembler.classifier());
            println!("{}", generator.generate(&url, date.unwrap_or_else(today)));
        }

        Command::Check { url } => {
            let url = extract_url_from_query(&url).unwrap_or(url);
            let assembler = ExportAssembler::from_config(&config)?;
            let classifier = assembler.classifier();

            match classifier.classify(&url) {
                Some(site) if classifier.is_valid(&url) => {
                    println!("supported: {} ({})", site.name, site.match_rule.describe());
                }
                _ => {
                    println!("unsupported: {}", url);
                    return Err(AppError::validation(format!("{url} is not supported")));
                }
            }
        }

        Command::Sites => {
            let registry = config.registry()?;
            for site in &registry {
                println!("{:<36} {}", site.name, site.match_rule.describe());
            }
            let classifier = docpack::UrlClassifier::new(registry);
            println!("\n{}", classifier.supported_count_label());
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({} sites)", config.sites.len());
        }
    }

    Ok(())
}

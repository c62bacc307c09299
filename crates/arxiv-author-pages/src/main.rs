//! arXiv Author Pages - Entry Point
//!
//! Writes, prints and lists per-author research summary pages.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_author_pages::{ArxivClient, AuthorPages, Config, FsStore, PageRequest, config::defaults};

#[derive(Parser, Debug)]
#[command(name = "arxiv-author-pages")]
#[command(about = "Build research summary pages from an author's arXiv papers")]
#[command(version)]
struct Cli {
    /// arXiv query endpoint
    #[arg(long, env = "ARXIV_API_URL")]
    api_url: Option<String>,

    /// Directory where pages are written and listed
    #[arg(long, env = "AUTHOR_SUMMARIES_DIR")]
    summaries_dir: Option<PathBuf>,

    /// JSON file mapping author names to biographies
    #[arg(long, env = "AUTHOR_INFO_FILE")]
    author_info_file: Option<PathBuf>,

    /// Regex for page file stems; must capture `professor_name`
    #[arg(long, env = "AUTHOR_SUMMARY_FILE_PATTERN")]
    summary_file_pattern: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch papers and write the author's page
    Write {
        /// Author name as it appears on arXiv
        author: String,

        /// Page version recorded in the file name
        #[arg(long, default_value_t = 1)]
        version: u32,

        #[command(flatten)]
        limits: Limits,
    },
    /// Fetch papers and print the author's page
    Show {
        /// Author name as it appears on arXiv
        author: String,

        /// Biography to use instead of the author info file
        #[arg(long)]
        bio: Option<String>,

        #[command(flatten)]
        limits: Limits,
    },
    /// List authors that already have pages
    List {
        /// Only list pages with this version
        #[arg(long)]
        version: Option<u32>,
    },
}

#[derive(clap::Args, Debug)]
struct Limits {
    /// Maximum number of papers considered
    #[arg(long, default_value_t = defaults::MAX_PAPERS)]
    max_papers: usize,

    /// Skip papers at least this many years old
    #[arg(long, default_value_t = defaults::MAX_YEARS)]
    max_years: f64,
}

impl Limits {
    fn request(&self) -> PageRequest {
        PageRequest::default().max_papers(self.max_papers).max_years(self.max_years)
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::with_overrides(
        cli.api_url,
        cli.summaries_dir,
        cli.author_info_file,
        cli.summary_file_pattern,
    )?;

    tracing::debug!(api_url = %config.api_url, summaries_dir = %config.summaries_dir.display(), "Loaded configuration");

    let client = ArxivClient::new(&config)?;
    let pages = AuthorPages::new(client, FsStore, config);

    match cli.command {
        Command::Write { author, version, limits } => {
            let path = pages.write_author_page(&author, version, &limits.request()).await?;
            println!("{}", path.display());
        }
        Command::Show { author, bio, limits } => {
            let mut request = limits.request();
            if let Some(bio) = bio {
                request = request.with_bio(bio);
            }
            print!("{}", pages.make_author_page(&author, &request).await?);
        }
        Command::List { version } => {
            for name in pages.list_authors_with_summaries(version)? {
                println!("{name}");
            }
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use arxiv_bibtex::config::ClientConfig;
use arxiv_bibtex::pipeline::arxiv_to_bibtex;
use arxiv_bibtex::sources::ArxivSource;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate BibTeX from arXiv URLs
#[derive(Parser, Debug)]
#[command(name = "arxiv-bibtex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate BibTeX from an arXiv URL", long_about = None)]
#[command(after_help = concat!(
    "Each URL must point at an abstract page, e.g. https://arxiv.org/abs/2002.05234\n",
    "To report a bug, include the failing URL and the output of a run with -vv."
))]
struct Cli {
    /// arXiv URL to generate BibTeX for. Multiple URLs can be given, either with one --url or with multiple.
    #[arg(long, required = true, num_args = 1..)]
    url: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let level = if quiet { "error" } else { log_level };

    // stdout is reserved for BibTeX
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "arxiv_bibtex={}",
            level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = ClientConfig::default().timeout_secs(cli.timeout);
    let source = ArxivSource::with_config(&config).context("Failed to create HTTP client")?;

    let entries = arxiv_to_bibtex(&source, cli.url.as_slice())
        .await
        .context("Failed to generate BibTeX")?;

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use fact_client::HttpFactSource;
use shared::protocol::DEFAULT_FACT_API_URL;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(about = "Fetch one random fact and print it")]
struct Args {
    #[arg(long, env = "FACT_API_URL", default_value = DEFAULT_FACT_API_URL)]
    endpoint: String,
    /// Print the raw service body as JSON instead of just the text.
    #[arg(long)]
    json: bool,
}

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let endpoint = Url::parse(&args.endpoint)
        .with_context(|| format!("invalid fact endpoint '{}'", args.endpoint))?;
    let source = HttpFactSource::new(endpoint);

    match source.fetch_response().await {
        Ok(body) if args.json => println!("{}", serde_json::to_string(&body)?),
        Ok(body) => println!("{}", body.fact),
        Err(err) => {
            tracing::debug!("fetch failed: {err}");
            anyhow::bail!("{}", err.user_message());
        }
    }
    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use monoclient::{Authorizer, Client, ClientConfig, NoAuth, SignedAuth, TokenAuth};
use reqwest::Body;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// monoclient - raw access to the Monobank API
///
/// Sends one request and prints the raw response body to stdout.
///
/// Authentication is chosen from the flags (or their environment variables):
/// a personal token via MONO_TOKEN, or a signed-request key via MONO_KEY_ID
/// and MONO_SECRET. Without either, requests are sent unauthenticated, which
/// is enough for the public endpoints.
///
/// Examples:
///   monoclient get /bank/currency
///   MONO_TOKEN=... monoclient get /personal/client-info
///   monoclient post /personal/webhook --data '{"webHookUrl":"https://example.com"}'
#[derive(Parser, Debug)]
#[command(author, version = env!("MONOCLIENT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (defaults to https://api.monobank.ua)
    #[arg(long, env = "MONO_BASE_URL", value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Whole-request timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// JSON file with client settings; flags take precedence
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Personal API token, sent as X-Token
    #[arg(
        long,
        env = "MONO_TOKEN",
        hide_env_values = true,
        conflicts_with = "key_id",
        global = true
    )]
    token: Option<String>,

    /// Key id for signed requests
    #[arg(long, env = "MONO_KEY_ID", requires = "secret", global = true)]
    key_id: Option<String>,

    /// Shared secret for signed requests
    #[arg(long, env = "MONO_SECRET", hide_env_values = true, global = true)]
    secret: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// GET an endpoint
    Get(GetArgs),

    /// POST a JSON payload to an endpoint
    Post(PostArgs),
}

#[derive(clap::Args, Debug)]
struct GetArgs {
    /// Endpoint path, e.g. /bank/currency
    #[arg(value_name = "ENDPOINT")]
    endpoint: String,
}

#[derive(clap::Args, Debug)]
struct PostArgs {
    /// Endpoint path, e.g. /personal/webhook
    #[arg(value_name = "ENDPOINT")]
    endpoint: String,

    /// Inline payload; stdin is used when neither --data nor --file is given
    #[arg(long, short = 'd', conflicts_with = "file")]
    data: Option<String>,

    /// Stream the payload from a file
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => ClientConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    Ok(config)
}

fn authorizer(cli: &Cli) -> Box<dyn Authorizer> {
    match (&cli.token, &cli.key_id, &cli.secret) {
        (Some(token), _, _) => Box::new(TokenAuth::new(token.as_str())),
        (None, Some(key_id), Some(secret)) => {
            let auth = SignedAuth::new(key_id.as_str(), secret);
            debug!("Signing requests with key id {}", auth.key_id());
            Box::new(auth)
        }
        _ => Box::new(NoAuth),
    }
}

async fn payload(args: &PostArgs) -> Result<Body> {
    if let Some(data) = &args.data {
        return Ok(Body::from(data.clone()));
    }
    if let Some(path) = &args.file {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open payload file {}", path.display()))?;
        return Ok(Body::from(file));
    }

    let mut buf = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut buf)
        .await
        .context("Failed to read payload from stdin")?;
    Ok(Body::from(buf))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let client = Client::with_config(authorizer(&cli), config)
        .context("Failed to create HTTP client")?;

    let (body, status) = match &cli.command {
        Commands::Get(args) => client
            .get_json(&args.endpoint)
            .await
            .with_context(|| format!("GET {} failed", args.endpoint))?,
        Commands::Post(args) => {
            let payload = payload(args).await?;
            client
                .post_json(&args.endpoint, payload)
                .await
                .with_context(|| format!("POST {} failed", args.endpoint))?
        }
    };

    info!("HTTP {} ({} bytes)", status, body.len());
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body).context("Failed to write response")?;
    stdout.flush()?;

    if !status.is_success() {
        bail!("API responded with HTTP {}", status);
    }
    Ok(())
}

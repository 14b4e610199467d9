use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ta_core::ChunkSettings;
use ta_inference::{Backend, Config, TextService};
use ta_web::{AppState, ServerConfig, DEFAULT_CORS_ORIGINS};
use tokio::io::AsyncReadExt;
use tracing::{info, Level};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarization and EN<->AR translation over HTTP", long_about = None)]
pub struct Cli {
    #[arg(long, value_enum, env = "TA_BACKEND", default_value = "huggingface", global = true)]
    backend: Backend,
    #[arg(long, env = "TA_API_BASE", default_value = ta_inference::DEFAULT_API_BASE, global = true)]
    api_base: String,
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true, global = true)]
    api_token: Option<String>,
    #[arg(long, default_value = ta_inference::SUMMARIZATION_MODEL, global = true)]
    summarization_model: String,
    #[arg(long, default_value = ta_inference::TRANSLATION_MODEL_EN_AR, global = true)]
    en_ar_model: String,
    #[arg(long, default_value = ta_inference::TRANSLATION_MODEL_AR_EN, global = true)]
    ar_en_model: String,
    /// Per-request timeout for model calls, in seconds
    #[arg(long, default_value_t = ta_inference::DEFAULT_TIMEOUT_SECS, global = true)]
    timeout_secs: u64,
    #[arg(long, default_value_t = ta_core::types::SUMMARIZE_CHUNK_CHARS, global = true)]
    summarize_chunk_chars: usize,
    #[arg(long, default_value_t = ta_core::types::TRANSLATE_CHUNK_CHARS, global = true)]
    translate_chunk_chars: usize,
    #[arg(long, env = "TA_LOG_LEVEL", default_value = "info", global = true)]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "TA_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "TA_PORT", default_value_t = 8000)]
        port: u16,
        /// Allowed CORS origin, may be repeated
        #[arg(long = "cors-origin", default_values_t = DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect::<Vec<_>>())]
        cors_origins: Vec<String>,
    },
    /// Summarize a file, or stdin when no file is given
    Summarize {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = ta_core::types::DEFAULT_MIN_LENGTH)]
        min_length: u32,
        #[arg(long, default_value_t = ta_core::types::DEFAULT_MAX_LENGTH)]
        max_length: u32,
        #[arg(long)]
        bullet_points: bool,
    },
    /// Translate a file, or stdin when no file is given
    Translate {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "en")]
        source: String,
        #[arg(long, default_value = "ar")]
        target: String,
    },
}

impl Cli {
    fn inference_config(&self) -> Config {
        Config {
            backend: self.backend,
            api_base: self.api_base.clone(),
            api_token: self.api_token.clone(),
            summarization_model: self.summarization_model.clone(),
            en_ar_model: self.en_ar_model.clone(),
            ar_en_model: self.ar_en_model.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

async fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Sentinel outcomes are printed like results; real failures propagate.
fn output_or_sentinel(result: ta_core::Result<String>) -> anyhow::Result<String> {
    match result {
        Ok(text) => Ok(text),
        Err(err) => err.sentinel().ok_or(err).map_err(anyhow::Error::from),
    }
}

async fn serve(
    service: TextService,
    host: &str,
    port: u16,
    cors_origins: Vec<String>,
) -> anyhow::Result<()> {
    let app = ta_web::create_app(AppState::new(service), &ServerConfig { cors_origins })?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", host, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let chunks = ChunkSettings::new(cli.summarize_chunk_chars, cli.translate_chunk_chars)?;
    let config = cli.inference_config();
    info!("🧠 Loading pipelines ({:?} backend)", config.backend);
    let registry = ta_inference::create_registry(&config).await?;
    let service = TextService::new(registry, chunks);

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origins,
        } => serve(service, &host, port, cors_origins).await?,
        Commands::Summarize {
            file,
            min_length,
            max_length,
            bullet_points,
        } => {
            let text = read_input(file.as_ref()).await?;
            match service
                .summarize(&text, min_length, max_length, bullet_points)
                .await
            {
                Ok(summary) => match summary.bullet_points {
                    Some(points) => points.iter().for_each(|p| println!("- {}", p)),
                    None => println!("{}", summary.summary),
                },
                Err(err) => println!("{}", output_or_sentinel(Err(err))?),
            }
        }
        Commands::Translate {
            file,
            source,
            target,
        } => {
            let text = read_input(file.as_ref()).await?;
            let translation = output_or_sentinel(service.translate(&text, &source, &target).await)?;
            println!("{}", translation);
        }
    }

    Ok(())
}

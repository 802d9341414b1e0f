// src/main.rs
// sentiment-chat - sentiment-aware chat service backed by Gemini

use anyhow::Result;
use clap::{Parser, Subcommand};
use sentiment_chat::assets::load_animation;
use sentiment_chat::config::AppConfig;
use sentiment_chat::credentials::looks_like_google_api_key;
use sentiment_chat::http::create_shared_client;
use sentiment_chat::pipeline::ChatPipeline;
use sentiment_chat::server::{self, AppState, types::ErrorResponse};
use std::net::SocketAddr;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sentiment-chat")]
#[command(about = "Chatbot that replies in a tone matching your message's sentiment")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    /// Model identifier (overrides SENTIMENT_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the chat web server (default)
    Serve {
        /// Address to bind
        #[arg(long, env = "SENTIMENT_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "SENTIMENT_PORT")]
        port: Option<u16>,

        /// Skip fetching the loading animation
        #[arg(long, default_value_t = false)]
        no_animation: bool,
    },

    /// Classify one message and print the reply
    Analyze {
        /// Message text
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = AppConfig::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }

    config.ensure_valid()?;
    if let Some(key) = &config.api_key {
        if looks_like_google_api_key(key) {
            info!("Google API key found");
        }
    }

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        no_animation: false,
    }) {
        Commands::Serve {
            host,
            port,
            no_animation,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if no_animation {
                config.animation_url = None;
            }
            run_server(config).await
        }
        Commands::Analyze { message } => run_analyze(config, &message).await,
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let http = create_shared_client(&config)?;

    let animation = match &config.animation_url {
        Some(url) => load_animation(&http, url).await,
        None => None,
    };

    let pipeline = ChatPipeline::from_config(&config, http);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    server::run(addr, AppState::new(pipeline, animation)).await?;
    Ok(())
}

async fn run_analyze(config: AppConfig, message: &str) -> Result<()> {
    let pipeline = ChatPipeline::from_config(&config, create_shared_client(&config)?);

    match pipeline.analyze(message).await {
        Ok(outcome) => {
            println!("Buddy's Reply:\n{}\n", outcome.reply);
            println!("Sentiment: {} (score {:.1})", outcome.label, outcome.score);
            Ok(())
        }
        Err(err) => {
            let (_, body) = ErrorResponse::from_pipeline(&err);
            eprintln!("{}", body.warning);
            Err(err.into())
        }
    }
}

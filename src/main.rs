//! Dev Playground - browse and edit your GitHub repositories in the browser
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=ghp_... dev-playground          # Start server
//! dev-playground --open                        # Start and open browser
//! OPENAI_API_KEY=sk-... dev-playground         # Enable AI summaries
//! ```

mod assets;
mod auth;
mod error;
mod github;
mod models;
mod openai;
mod routes;
mod state;
mod tree;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github::GitHubClient;
use openai::Summarizer;
use state::AppState;

/// Dev Playground - browse and edit GitHub repositories in your browser
#[derive(Parser, Debug)]
#[command(name = "dev-playground")]
#[command(about = "A self-contained GitHub repository browser and editor", long_about = None)]
struct Cli {
    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,

    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Fallback GitHub token for requests that carry no Authorization header
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = github::client::DEFAULT_API_URL)]
    github_api_url: String,

    /// OpenAI API key; summaries are disabled without it
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// OpenAI API base URL
    #[arg(long, env = "OPENAI_API_URL", default_value = openai::summarizer::DEFAULT_API_URL)]
    openai_api_url: String,

    /// Chat model used for repository summaries
    #[arg(long, env = "OPENAI_MODEL", default_value = openai::summarizer::DEFAULT_MODEL)]
    model: String,

    /// Token limit for a generated summary
    #[arg(long, default_value_t = openai::summarizer::DEFAULT_MAX_TOKENS)]
    summary_max_tokens: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let github = GitHubClient::new(&cli.github_api_url)?;
    let summarizer = Summarizer::new(
        &cli.openai_api_url,
        cli.openai_api_key,
        cli.model,
        cli.summary_max_tokens,
    )?;
    if !summarizer.is_enabled() {
        tracing::warn!("OPENAI_API_KEY not set; summary requests will be rejected");
    }
    let has_server_token = cli.github_token.as_deref().is_some_and(|t| !t.is_empty());

    let state = Arc::new(AppState::new(github, summarizer, cli.github_token));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state))
        .fallback(get(assets::serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", cli.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://127.0.0.1:{}", cli.port);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │                Dev Playground               │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Server:     {}", url);
    println!("  GitHub:     {}", cli.github_api_url);
    println!(
        "  Token:      {}",
        if has_server_token { "server fallback configured" } else { "browser session only" }
    );
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

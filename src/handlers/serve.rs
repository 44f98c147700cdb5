use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use crate::config::NlshConfig;
use crate::engine::Shell;
use crate::engine::output::DisplayMode;
use crate::engine::registry::Registry;

const INDEX_HTML: &str = include_str!("index.html");

/// One engine for all requests. The mutex keeps commands (and `cd`) strictly
/// one at a time. Completion reads the registry and never takes the lock.
#[derive(Clone)]
struct AppState {
    shell: Arc<Mutex<Shell>>,
    registry: Arc<Registry>,
}

impl AppState {
    fn new(shell: Shell) -> Self {
        Self {
            shell: Arc::new(Mutex::new(shell)),
            registry: Arc::new(Registry::new()),
        }
    }
}

#[derive(Deserialize)]
struct CommandForm {
    command: String,
}

pub fn handle_serve(cwd: PathBuf, config: &NlshConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let web = config.web_settings()?;
    let host = host.unwrap_or(web.host);
    let port = port.unwrap_or(web.port);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(serve(cwd, host, port))
}

async fn serve(cwd: PathBuf, host: String, port: u16) -> Result<()> {
    let app = router(Shell::non_interactive(cwd));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    info!("Serving web terminal on http://{}:{}", host, port);
    println!("Web terminal listening on http://{}:{}", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("HTTP server error")
}

fn router(shell: Shell) -> Router {
    let state = AppState::new(shell);
    Router::new()
        .route("/", get(index))
        .route("/run", post(run_command))
        .route("/autocomplete", post(autocomplete))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn run_command(State(state): State<AppState>, Form(form): Form<CommandForm>) -> String {
    debug!("web run: {}", form.command);
    let shell = state.shell.clone();
    // Filesystem work blocks; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        let mut shell = shell.lock().unwrap_or_else(PoisonError::into_inner);
        shell.execute(&form.command).render(DisplayMode::Plain)
    })
    .await;

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("web run failed: {}", e);
            format!("Unexpected error: {}", e)
        }
    }
}

async fn autocomplete(State(state): State<AppState>, Form(form): Form<CommandForm>) -> String {
    // One match, many matches space-joined, or nothing.
    state.registry.complete_line(&form.command).join(" ")
}

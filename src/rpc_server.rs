//! Tabspace RPC server: JSON-RPC over stdin/stdout for the UI host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"tab.create", "params":{"url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries only protocol messages.

use std::sync::Mutex;
use std::time::Instant;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tabspace::app::App;
use tabspace::rpc_handler::handle_request;
use tabspace::services::backend_client::BackendClient;
use tabspace::services::settings_engine::SettingsEngineTrait;

/// Fixed-window rate limiter.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self {
            window_start: Instant::now(),
            request_count: 0,
            max_per_second,
        }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TABSPACE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn write_line(stdout: &mut io::Stdout, value: &Value) -> std::io::Result<()> {
    stdout.write_all(value.to_string().as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config_path = std::env::var("TABSPACE_DATA_DIR").ok().map(|dir| {
        std::path::PathBuf::from(dir)
            .join("settings.json")
            .to_string_lossy()
            .to_string()
    });
    let mut app = App::new(config_path);
    app.startup();

    let client = match BackendClient::new(&app.settings_engine.get_settings().backend) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, "backend disabled");
            None
        }
    };
    let app = Mutex::new(app);

    let mut stdout = io::stdout();
    write_line(
        &mut stdout,
        &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}),
    )
    .await?;
    info!("rpc server ready");

    let mut rate_limiter = RateLimiter::new(200);
    let mut lines = BufReader::new(io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_line(&mut stdout, &json!({"id": null, "error": format!("parse error: {}", e)}))
                    .await?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            write_line(&mut stdout, &json!({"id": id, "error": "rate limit exceeded"})).await?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_request(&app, client.as_ref(), method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                error!(method, error = %err, "rpc call failed");
                json!({"id": id, "error": err})
            }
        };
        write_line(&mut stdout, &response).await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

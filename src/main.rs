#![allow(non_snake_case)]

mod cli;
mod clients;
mod config;
mod events;
mod handlers;
mod models;
mod render;
mod runtime;
mod service;
mod state;

use std::env;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::handlers::form::FormEngine;
use crate::service::status_reporter::{ConsoleReporter, StatusReporter};
use crate::service::sync_service::{BackendSyncService, SyncClient};
use crate::state::collection::EventCollection;
use crate::state::draft::DraftStore;

const DEFAULT_RUN_MODE: &str = "session";
const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let backend_url = get_prop("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL.to_string());
    let surface_errors = get_prop("SURFACE_SYNC_ERRORS")
        .map(|v| v == "1" || v == "true" || v == "yes")
        .unwrap_or(false);

    let sync: Arc<dyn SyncClient> =
        match get_prop("HTTP_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            Some(secs) => match BackendSyncService::with_timeout(backend_url, secs) {
                Ok(service) => Arc::new(service),
                Err(e) => {
                    eprintln!("Failed to build HTTP client: {}", e);
                    return;
                }
            },
            None => Arc::new(BackendSyncService::new(backend_url)),
        };

    let draft = Arc::new(Mutex::new(DraftStore::new()));
    let events = Arc::new(Mutex::new(EventCollection::new()));
    let reporter: Arc<dyn StatusReporter> = Arc::new(ConsoleReporter::new(surface_errors));
    let engine = Arc::new(FormEngine::new(draft, events, sync, reporter));

    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "cli" {
        cli::cli(engine).await;
    } else if run_mode == "session" {
        runtime::run_session(engine).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}

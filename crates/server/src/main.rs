// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, patch, post, put},
};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tender_bid_persistence::Persistence;
use tokio::sync::Mutex;
use tracing::info;

use crate::handlers::{
    handle_add_responsible, handle_create_bid, handle_create_employee,
    handle_create_organization, handle_create_review, handle_create_tender, handle_delete_bid,
    handle_delete_tender, handle_get_bid, handle_get_tender, handle_list_bid_versions,
    handle_list_bids, handle_list_bids_for_tender, handle_list_my_bids, handle_list_my_tenders,
    handle_list_reviews, handle_list_tender_versions, handle_list_tenders,
    handle_partial_update_bid, handle_partial_update_tender, handle_ping, handle_rollback_bid,
    handle_rollback_tender, handle_update_bid, handle_update_bid_status, handle_update_tender,
    handle_update_tender_status,
};

/// Tender Bid Server - HTTP server for tenders, bids and their version history
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,
}

/// Application state shared across handlers.
///
/// The single `SQLite` connection is serialized behind a mutex.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handle_ping))
        .route(
            "/tenders",
            get(handle_list_tenders).post(handle_create_tender),
        )
        .route("/tenders/new", post(handle_create_tender))
        .route("/tenders/my", get(handle_list_my_tenders))
        .route(
            "/tenders/{id}",
            get(handle_get_tender)
                .put(handle_update_tender)
                .patch(handle_partial_update_tender)
                .delete(handle_delete_tender),
        )
        .route("/tenders/{id}/status", patch(handle_update_tender_status))
        .route("/tenders/{id}/edit", patch(handle_partial_update_tender))
        .route(
            "/tenders/{id}/rollback/{version}",
            put(handle_rollback_tender),
        )
        .route("/tenders/{id}/versions", get(handle_list_tender_versions))
        .route("/bids", get(handle_list_bids).post(handle_create_bid))
        .route("/bids/new", post(handle_create_bid))
        .route("/bids/my", get(handle_list_my_bids))
        .route(
            "/bids/{id}",
            get(handle_get_bid)
                .put(handle_update_bid)
                .patch(handle_partial_update_bid)
                .delete(handle_delete_bid),
        )
        .route("/bids/{id}/status", patch(handle_update_bid_status))
        .route("/bids/{id}/edit", patch(handle_partial_update_bid))
        .route("/bids/{id}/rollback/{version}", put(handle_rollback_bid))
        .route("/bids/{id}/versions", get(handle_list_bid_versions))
        .route("/bids/{id}/list", get(handle_list_bids_for_tender))
        .route("/bids/{id}/reviews", get(handle_list_reviews))
        .route("/bids/{id}/feedback", post(handle_create_review))
        .route("/employees", post(handle_create_employee))
        .route("/organizations", post(handle_create_organization))
        .route(
            "/organizations/{id}/responsibles",
            post(handle_add_responsible),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Tender Bid Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! GreenWheelStation chatbot API server
//!
//! (c) GreenWheelStation 2025

use greenwheel_chat_api::api;
use greenwheel_chat_api::core::assistant::AssistantConfig;
use greenwheel_chat_api::core::services::MyChatService;
use greenwheel_chat_api::infrastructure::database::DatabaseConnection;
use greenwheel_chat_api::infrastructure::openai::OpenAiClient;
use greenwheel_chat_api::infrastructure::repositories::DbMessageStore;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use di::{Injectable, ServiceCollection};
use di_axum::RouterServiceProviderExtensions;
use log::info;
use serde::Serialize;
use tokio::runtime::{Builder, Runtime};
use tower_http::cors::{Any, CorsLayer};

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task());

    Ok(())
}

async fn web_server_task() {
    let provider = ServiceCollection::new()
        .add(DatabaseConnection::singleton())
        .add(AssistantConfig::singleton())
        .add(OpenAiClient::singleton())
        .add(DbMessageStore::scoped())
        .add(MyChatService::scoped())
        .build_provider()
        .unwrap();

    // build our application with a route
    let app = Router::new()
        .route("/health", get(health))
        .nest("/chat", api::chat::router())
        .layer(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_origin([
                    "http://localhost:3000".parse::<HeaderValue>().unwrap(),
                    "http://localhost:5173".parse::<HeaderValue>().unwrap(),
                ]),
        )
        .with_provider(provider);

    dotenvy::dotenv().ok();
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_owned());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
    info!("Shutting down...");
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

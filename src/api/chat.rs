//! Chat endpoint

use crate::core::errors::ChatError;
use crate::core::traits::ChatService;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/", post(chat))
}

async fn chat(
    Inject(chat_service): Inject<dyn ChatService>,
    Json(request): Json<schemas::ChatRequest>,
) -> Result<(StatusCode, Json<schemas::ChatResponse>), (StatusCode, Json<schemas::ErrorDetail>)> {
    match chat_service.handle_chat(&request.message).await {
        Ok(reply) => Ok((StatusCode::OK, Json(schemas::ChatResponse { reply }))),
        Err(error) => {
            let status = match error {
                ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
                ChatError::Completion(_) | ChatError::Persistence(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((
                status,
                Json(schemas::ErrorDetail {
                    detail: error.to_string(),
                }),
            ))
        }
    }
}

pub mod schemas {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Debug)]
    pub struct ChatRequest {
        /// An absent field validates like an empty message.
        #[serde(default)]
        pub message: String,
    }

    #[derive(Serialize, Debug)]
    pub struct ChatResponse {
        pub reply: String,
    }

    #[derive(Serialize, Debug)]
    pub struct ErrorDetail {
        pub detail: String,
    }
}

pub mod entries;
pub mod search;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{autocomplete::Autocomplete, models::MessagesConfig};

/// Application context passed to all handlers.
pub struct Ctx {
    /// All reads and writes go through this lock, one request at a time.
    pub autocomplete: Mutex<Autocomplete>,
    pub messages: MessagesConfig,
    pub version: String,
}

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl<E: std::fmt::Display> From<E> for ApiErr {
    fn from(err: E) -> Self {
        Self::new(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;

/// Public config exposed to clients.
#[derive(Serialize)]
pub struct PublicConfig {
    pub version: String,
    pub messages: MessagesConfig,
    pub entries: usize,
}

/// Get the public config (version, UI strings).
pub async fn get_config(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<PublicConfig>> {
    let entries = ctx.autocomplete.lock().await.len();

    Ok(json(PublicConfig {
        version: ctx.version.clone(),
        messages: ctx.messages.clone(),
        entries,
    }))
}

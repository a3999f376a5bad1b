use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{json, ApiErr, ApiResp, Ctx, Result};
use crate::{autocomplete, models::Greeting};

/// Entry creation request. An absent or empty payload cancels the add.
#[derive(Debug, serde::Deserialize)]
pub struct EntryReq {
    pub name: String,
    #[serde(default)]
    pub payload: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct PromptQuery {
    pub name: String,
}

/// A pending entry: the canonical label and the text to prompt the user with.
#[derive(Debug, serde::Serialize)]
pub struct Prompt {
    pub label: String,
    pub prompt: String,
}

#[derive(Debug, serde::Serialize)]
pub struct EntryResp {
    pub label: String,
}

/// List all vocabulary labels.
pub async fn get_entries(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Vec<String>>> {
    let labels = ctx
        .autocomplete
        .lock()
        .await
        .vocabulary()
        .keys()
        .cloned()
        .collect();

    Ok(json(labels))
}

/// Get the greeting for an exact (case-sensitive) label.
pub async fn get_entry(
    State(ctx): State<Arc<Ctx>>,
    Path(label): Path<String>,
) -> Result<ApiResp<Greeting>> {
    let label = label.trim();
    let ac = ctx.autocomplete.lock().await;

    let message = ac.lookup(label).map_err(|e| match e {
        autocomplete::Error::NotFound(_) => {
            ApiErr::new(ctx.messages.not_found.clone(), StatusCode::NOT_FOUND)
        }
    })?;

    Ok(json(Greeting {
        label: label.to_string(),
        title: ctx.messages.greeting_title(label),
        message: message.to_string(),
    }))
}

/// First half of adding an entry: canonicalize the name and return the prompt
/// to ask the user for its payload. Nothing is stored.
pub async fn get_prompt(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<PromptQuery>,
) -> Result<ApiResp<Prompt>> {
    let name = query.name.trim();
    if name.is_empty() {
        return Err(ApiErr::new("name is required", StatusCode::BAD_REQUEST));
    }

    let pending = ctx.autocomplete.lock().await.request_entry(name);
    Ok(json(Prompt {
        prompt: ctx.messages.add_prompt(pending.label()),
        label: pending.label().to_string(),
    }))
}

/// Add a new entry. Responds with the canonical label, or with no data if the
/// add was cancelled for want of a payload.
pub async fn insert_entry(
    State(ctx): State<Arc<Ctx>>,
    Json(req): Json<EntryReq>,
) -> Result<ApiResp<EntryResp>> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiErr::new("name is required", StatusCode::BAD_REQUEST));
    }

    let label = match req.payload.as_deref() {
        Some(payload) => ctx.autocomplete.lock().await.add_entry(name, payload),
        None => None,
    };

    Ok(ApiResp {
        message: None,
        data: label.map(|label| EntryResp { label }),
    })
}

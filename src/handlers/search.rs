use std::sync::Arc;

use axum::extract::{Query, State};

use super::{ApiResp, Ctx, Result};
use crate::models::QueryResult;

/// Suggest query params.
#[derive(Debug, serde::Deserialize, Default)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// Get autocomplete suggestions for the (untrimmed) query `q`. When nothing
/// matches, the message carries the "add new entry" text for the client to show.
pub async fn suggest(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SuggestQuery>,
) -> Result<ApiResp<QueryResult>> {
    let res = ctx.autocomplete.lock().await.query(&query.q);

    let message = match &res {
        QueryResult::Create { name } => Some(ctx.messages.add_entry(name)),
        _ => None,
    };

    Ok(ApiResp {
        message,
        data: Some(res),
    })
}

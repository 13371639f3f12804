use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use std::sync::MutexGuard;

use typetrial_core::{Quote, QuoteStore};

use crate::AppState;

/// Query parameters shared by the `/quote` verbs. Which ones are required
/// depends on the verb; each handler checks its own.
#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub id: Option<usize>,
    pub text: Option<String>,
    pub author: Option<String>,
}

type Rejection = (StatusCode, String);

fn lock_store(state: &AppState) -> Result<MutexGuard<'_, QuoteStore>, Rejection> {
    state
        .store
        .lock()
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "store lock poisoned".into()))
}

/// `GET /quote?id=<n>` — one quote by ID, or a random one when `id` is
/// omitted. 404 when the ID is out of range or the store is empty.
pub async fn get_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<Quote>, Rejection> {
    let store = lock_store(&state)?;

    let quote = match params.id {
        Some(id) => store.get(id),
        None => store.random(),
    };

    quote
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "quote not found".into()))
}

/// `DELETE /quote?id=<n>` — 204 on success, 404 when out of range.
pub async fn delete_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<StatusCode, Rejection> {
    let id = params
        .id
        .ok_or((StatusCode::BAD_REQUEST, "missing id".into()))?;

    let mut store = lock_store(&state)?;
    if store.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "quote not found".into()))
    }
}

/// `POST /quote?text=&author=` — append a new quote, 201.
pub async fn create_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<StatusCode, Rejection> {
    let (text, author) = match (params.text, params.author) {
        (Some(text), Some(author)) if !text.is_empty() && !author.is_empty() => (text, author),
        _ => return Err((StatusCode::BAD_REQUEST, "missing text or author".into())),
    };

    let mut store = lock_store(&state)?;
    store.add(Quote::new(text, author));

    Ok(StatusCode::CREATED)
}

/// `PUT /quote?id=&text=&author=` — replace in place, 204 or 404.
///
/// The replacement starts with no best time, matching a fresh quote.
pub async fn update_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<StatusCode, Rejection> {
    let (id, text, author) = match (params.id, params.text, params.author) {
        (Some(id), Some(text), Some(author)) if !text.is_empty() && !author.is_empty() => {
            (id, text, author)
        }
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "missing id, text or author".into(),
            ))
        }
    };

    let mut store = lock_store(&state)?;
    if store.update(id, Quote::new(text, author)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "quote not found".into()))
    }
}

/// `GET /quotes` — the full ordered array.
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, Rejection> {
    let store = lock_store(&state)?;
    Ok(Json(store.quotes().to_vec()))
}

/// `OPTIONS /quote` — 204 with the allowed verbs.
pub async fn quote_options() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (
        StatusCode::NO_CONTENT,
        [(header::ALLOW, "GET, POST, PUT, DELETE, OPTIONS")],
    )
}

//! JSON HTTP API over a shared [`QuoteStore`].
//!
//! The store lives in memory behind a mutex; handlers never write the quotes
//! file. Quote IDs are positions in the store, so they shift after a delete.

pub mod handlers;

use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use typetrial_core::QuoteStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<QuoteStore>>,
}

pub fn create_router(store: Arc<Mutex<QuoteStore>>) -> Router {
    let state = AppState { store };

    Router::new()
        .route(
            "/quote",
            get(handlers::get_quote)
                .delete(handlers::delete_quote)
                .post(handlers::create_quote)
                .put(handlers::update_quote)
                .options(handlers::quote_options),
        )
        .route("/quotes", get(handlers::list_quotes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

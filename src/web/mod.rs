mod handlers;
mod models;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{ask, assistant_page, count, counter_page, health, index, not_found};
#[allow(unused_imports)]
pub use models::{AskForm, CountForm};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/counter", get(counter_page).post(count))
        .route("/assistant", get(assistant_page).post(ask))
        .fallback(not_found)
        .with_state(state)
}

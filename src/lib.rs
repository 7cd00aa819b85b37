pub mod assistant;
pub mod chat;
pub mod counter;
pub mod persona;
pub mod web;

use std::{env, sync::Arc};

use axum::Router;

use crate::chat::ChatClient;

#[derive(Clone)]
pub struct AppState {
    pub chat: ChatClient,
}

pub fn app_state_from_env() -> Arc<AppState> {
    Arc::new(AppState {
        chat: ChatClient::from_env(),
    })
}

pub fn server_port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}

pub fn build_app(state: Arc<AppState>) -> Router {
    web::router(state)
}

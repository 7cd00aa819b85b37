use demo_webapps::{app_state_from_env, build_app, run_server, server_port_from_env};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = app_state_from_env();
    let port = server_port_from_env();

    tracing::info!(port, "starting demo web apps");
    run_server(build_app(state), port).await;
}

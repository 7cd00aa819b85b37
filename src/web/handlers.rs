use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};

use crate::assistant::{self, AskError};
use crate::counter;
use crate::AppState;

use super::models::{AskForm, CountForm};

pub async fn index() -> Html<&'static str> {
    const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    Html(INDEX)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn counter_page() -> Html<&'static str> {
    const COUNTER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/counter.html"));
    Html(COUNTER)
}

pub async fn assistant_page() -> Html<&'static str> {
    const ASSISTANT: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/assistant.html"));
    Html(ASSISTANT)
}

pub async fn count(Form(form): Form<CountForm>) -> Html<String> {
    let total = counter::count_chars(&form.text);
    tracing::info!(chars = total, "character count requested");

    Html(result_page(
        "Character Counter",
        "/counter",
        &format!("<p>Character count: <strong>{total}</strong></p>"),
    ))
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    tracing::info!(persona = form.persona.label(), "assistant question submitted");

    match assistant::answer(&state.chat, form.persona, &form.api_key, &form.question).await {
        Ok(text) => Ok(Html(result_page(
            "Expert Assistant",
            "/assistant",
            &format!("<p class=\"answer\">{}</p>", html_escape(&text)),
        ))),
        Err(err) => {
            tracing::warn!(error = %err, "assistant submission rejected");
            let status = match &err {
                AskError::MissingApiKey | AskError::MissingQuestion => StatusCode::BAD_REQUEST,
                AskError::Provider(_) => StatusCode::BAD_GATEWAY,
            };
            Err((
                status,
                Html(result_page(
                    "Expert Assistant",
                    "/assistant",
                    &format!("<p class=\"error\">{}</p>", html_escape(&err.to_string())),
                )),
            ))
        }
    }
}

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html("<!doctype html><html><body><p>Not found</p><p><a href=\"/\">Home</a></p></body></html>"),
    )
}

fn result_page(title: &str, back: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h1>{title}</h1>
{body}
<p><a href="{back}">Back</a></p>
</body>
</html>
"#
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

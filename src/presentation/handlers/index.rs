use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::presentation::state::AppState;
use crate::presentation::views::render_upload_form;

pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_upload_form(state.upload_settings.max_file_size_mb))
}

use axum::http::StatusCode;

use super::layout::{escape_html, page};

pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<h1>Upload failed / 上傳失敗</h1>
<div class="error"><strong>{status}</strong>: {message}</div>
<p><a href="/">Try again / 重新上傳</a></p>"#,
        status = status,
        message = escape_html(message),
    );

    page("Upload failed", &body)
}

/// Escapes text for interpolation into HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(super) fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: 'Segoe UI', 'Noto Sans TC', sans-serif;
            max-width: 760px;
            margin: 40px auto;
            padding: 0 20px;
            color: #222;
            line-height: 1.6;
        }}
        h1 {{ font-size: 1.6em; }}
        table {{ border-collapse: collapse; margin: 12px 0; }}
        td, th {{ border: 1px solid #ddd; padding: 6px 12px; text-align: left; }}
        .error {{ background: #fff0f0; border: 1px solid #e0a0a0; padding: 12px; }}
        .feedback {{ background: #f4f8ff; padding: 12px; border-radius: 6px; }}
        label {{ display: block; margin-top: 12px; }}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html(title),
        body = body,
    )
}

use axum::response::Html;

pub const PAGE_TITLE: &str = "Random AI Character Chat";
pub const PAGE_DESCRIPTION: &str = "Chat with a random AI character";

/// GET `/` — placeholder page served when no frontend bundle has been built
pub async fn shell_handler() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
  <meta charset="utf-8">
  <title>{PAGE_TITLE}</title>
  <meta name="description" content="{PAGE_DESCRIPTION}">
  <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
  <main>
    <h1>{PAGE_TITLE}</h1>
    <p>The frontend bundle is missing.</p>
    <p>Build it with <code>trunk build --release</code> inside <code>frontend/</code>.</p>
  </main>
</body>
</html>
"#
    ))
}

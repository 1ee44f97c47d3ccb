use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Upload page: two file inputs posting to the analyze endpoint.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

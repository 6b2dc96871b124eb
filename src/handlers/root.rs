use axum::response::Redirect;

/// The UI is a static bundle mounted under /static
pub async fn index() -> Redirect {
    Redirect::to("/static/index.html")
}

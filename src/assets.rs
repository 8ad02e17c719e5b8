//! Embedded single-page frontend.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::error::AppError;

#[derive(Embed)]
#[folder = "frontend/dist"]
struct Assets;

/// Serve an embedded file, falling back to `index.html` for client-side
/// routes. Unknown `/api` paths get a JSON 404 instead of the page.
pub async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    if path == "api" || path.starts_with("api/") {
        return AppError::NotFound(format!("/{}", path)).into_response();
    }

    let path = if path.is_empty() || !path.contains('.') {
        "index.html"
    } else {
        path
    };

    match Assets::get(path).map(|c| (path, c)).or_else(|| {
        Assets::get("index.html").map(|c| ("index.html", c))
    }) {
        Some((served, content)) => {
            let mime = mime_guess::from_path(served).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

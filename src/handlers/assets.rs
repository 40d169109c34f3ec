// src/handlers/assets.rs
use crate::app::App;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::PathBuf;

fn content_type(file: &str) -> Mime {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg" | "jpeg") => mime::IMAGE_JPEG,
        Some("ico") => "image/x-icon"
            .parse()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Serves a file below `App::static_dir`. Hidden and parent segments are refused.
pub fn static_file(app: &App, segments: &[&str]) -> ResultResp {
    if segments.is_empty()
        || segments
            .iter()
            .any(|s| s.starts_with('.') || s.contains('\\'))
    {
        return Err(ServerError::NotFound);
    }

    let mut path = PathBuf::from(&app.static_dir);
    path.extend(segments);
    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;
    let file = segments.last().copied().unwrap_or_default();
    let mime = content_type(file);

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_by_extension() {
        assert_eq!(content_type("main.css"), mime::TEXT_CSS_UTF_8);
        assert_eq!(content_type("htmx.js").as_ref(), "application/javascript; charset=utf-8");
        assert_eq!(content_type("favicon.ico").essence_str(), "image/x-icon");
        assert_eq!(content_type("README"), mime::APPLICATION_OCTET_STREAM);
    }
}

//! JSON export of a loaded table
//!
//! The artifact is the full row sequence, pretty-printed, with no added
//! metadata: parsing it back yields exactly the in-memory dataset.

use crate::types::Row;

/// Error type for export operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize rows: {0}")]
    Serialize(String),

    #[cfg(feature = "web")]
    #[error("browser download failed: {0}")]
    Browser(String),
}

/// Name of the downloaded artifact: the source name with its final
/// extension suffix stripped, plus `_extracted.json`.
pub fn artifact_name(source: &str) -> String {
    let stem = match source.rfind('.') {
        // Only a non-empty trailing segment counts as an extension;
        // "report." and "archive.tar.gz" keep "report." and "archive.tar".
        Some(dot) if dot + 1 < source.len() => &source[..dot],
        _ => source,
    };
    format!("{stem}_extracted.json")
}

/// Serialize the full row sequence, pretty-printed.
///
/// An empty dataset serializes to `[]`; that is a valid artifact, not an
/// error.
pub fn rows_json(rows: &[Row]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(rows).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Serialize `rows` and hand the artifact to the browser as a download
/// named after [`artifact_name`].
#[cfg(feature = "web")]
pub fn download(source_name: &str, rows: &[Row]) -> Result<(), ExportError> {
    use wasm_bindgen::{JsCast, JsValue};

    let json = rows_json(rows)?;
    let name = artifact_name(source_name);

    let window = web_sys::window().ok_or_else(|| ExportError::Browser("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob =
        web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| ExportError::Browser("anchor element cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&name);

    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("no body".to_string()))?;
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;

    Ok(())
}

#[cfg(feature = "web")]
fn js_error(value: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(format!("{value:?}"))
}

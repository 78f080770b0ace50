//! Browser file-input helpers. These call into `web_sys` and only work
//! inside a browser.

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement, Url};

use crate::api::{ApiError, UploadFile};

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &Event) -> Option<File> {
    ev.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

pub async fn read_upload(file: File) -> Result<UploadFile, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| ApiError::unknown(format!("Failed to read {}: {:?}", file.name(), err)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile::new(file.name(), file.type_(), bytes))
}

pub async fn read_optional_upload(file: Option<File>) -> Result<Option<UploadFile>, ApiError> {
    match file {
        Some(file) => read_upload(file).await.map(Some),
        None => Ok(None),
    }
}

pub fn object_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file)
        .map_err(|err| log::warn!("object URL unavailable: {:?}", err))
        .ok()
}

pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}

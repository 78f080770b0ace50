use reqwest::multipart::{Form, Part};

use crate::api::types::ApiError;

/// A file picked in an image input, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let content_type = content_type.into();
        Self {
            file_name: file_name.into(),
            content_type: if content_type.trim().is_empty() {
                "application/octet-stream".to_string()
            } else {
                content_type
            },
            bytes,
        }
    }
}

/// Ordered multipart body: text fields first, then files.
///
/// Kept as plain data so the exact field set can be inspected before it is
/// turned into a `reqwest` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    texts: Vec<(String, String)>,
    files: Vec<(String, UploadFile)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.texts.push((name.to_string(), value.into()));
        self
    }

    /// Adds the file under `name` only when one was chosen.
    pub fn optional_file(mut self, name: &str, file: Option<UploadFile>) -> Self {
        if let Some(file) = file {
            self.files.push((name.to_string(), file));
        }
        self
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn file(&self, name: &str) -> Option<&UploadFile> {
        self.files
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, file)| file)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.texts
            .iter()
            .map(|(key, _)| key.as_str())
            .chain(self.files.iter().map(|(key, _)| key.as_str()))
            .collect()
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.texts {
            form = form.text(name, value);
        }
        for (name, file) in self.files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| ApiError::validation(format!("Unsupported file type: {}", e)))?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> UploadFile {
        UploadFile::new("logo.png", "image/png", vec![137, 80, 78, 71])
    }

    #[test]
    fn chosen_file_is_added_after_text_fields() {
        let payload = FormPayload::new()
            .text("title", "About")
            .text("content", "Body")
            .optional_file("image", Some(png()));
        assert_eq!(payload.field_names(), vec!["title", "content", "image"]);
        assert_eq!(payload.file("image").map(|f| f.file_name.as_str()), Some("logo.png"));
    }

    #[test]
    fn missing_file_omits_the_field() {
        let payload = FormPayload::new()
            .text("title", "About")
            .optional_file("image", None);
        assert_eq!(payload.field_names(), vec!["title"]);
        assert!(payload.file("image").is_none());
        assert_eq!(payload.text_value("title"), Some("About"));
    }

    #[test]
    fn blank_content_type_defaults_to_octet_stream() {
        let file = UploadFile::new("x.bin", " ", vec![]);
        assert_eq!(file.content_type, "application/octet-stream");
    }

    #[test]
    fn into_form_accepts_image_mime() {
        let payload = FormPayload::new()
            .text("site_name", "Acme")
            .optional_file("logo", Some(png()));
        assert!(payload.into_form().is_ok());
    }

    #[test]
    fn into_form_rejects_malformed_mime() {
        let payload = FormPayload::new().optional_file(
            "logo",
            Some(UploadFile {
                file_name: "x".into(),
                content_type: "not a mime".into(),
                bytes: vec![],
            }),
        );
        let err = payload.into_form().expect_err("bad mime");
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}

//! Request bodies, file attachments and per-request transport options.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;

use crate::error::InvalidInputError;
use crate::types::Params;

/// A request body.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// URL-encoded form fields. Sent as text parts when files are attached.
    Form(Params),
    /// A JSON document.
    Json(serde_json::Value),
    /// Raw bytes, sent as-is.
    Raw(Vec<u8>),
}

/// A file attached to a multipart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    /// Sets the MIME type of the part.
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    fn into_part(self) -> Result<(String, Part), InvalidInputError> {
        let mut part = Part::bytes(self.bytes).file_name(self.file_name);
        if let Some(mime) = self.mime {
            part = part.mime_str(&mime).map_err(|e| InvalidInputError::Body {
                reason: format!("invalid MIME type '{}': {}", mime, e),
            })?;
        }
        Ok((self.field, part))
    }
}

/// Extra transport options for a single request.
///
/// Headers set here override the client's default headers. No timeout is
/// applied unless one is given.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or value is not a valid header.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, InvalidInputError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| InvalidInputError::Header {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| InvalidInputError::Header {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }
}

/// Attaches the body and any files to a request.
pub(crate) fn attach_body(
    builder: RequestBuilder,
    body: Option<Body>,
    files: Vec<FilePart>,
) -> Result<RequestBuilder, InvalidInputError> {
    if files.is_empty() {
        return Ok(match body {
            None => builder,
            Some(Body::Form(fields)) => builder.form(fields.as_pairs()),
            Some(Body::Json(value)) => builder.json(&value),
            Some(Body::Raw(bytes)) => builder.body(bytes),
        });
    }

    let mut form = Form::new();
    match body {
        None => {}
        Some(Body::Form(fields)) => {
            for (key, value) in fields.as_pairs() {
                form = form.text(key.clone(), value.clone());
            }
        }
        Some(Body::Json(_) | Body::Raw(_)) => {
            return Err(InvalidInputError::Body {
                reason: "only form fields can accompany file uploads".to_string(),
            });
        }
    }

    for file in files {
        let (field, part) = file.into_part()?;
        form = form.part(field, part);
    }

    Ok(builder.multipart(form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_headers_are_validated() {
        assert!(RequestOptions::new().header("x-trace", "abc").is_ok());
        assert!(RequestOptions::new().header("bad header", "abc").is_err());
        assert!(RequestOptions::new().header("x-trace", "a\nb").is_err());
    }

    #[test]
    fn raw_body_with_files_is_rejected() {
        let builder = reqwest::Client::new().post("http://localhost/upload");
        let files = vec![FilePart::new("file", "rules.xml", b"<rule/>".to_vec())];
        let result = attach_body(builder, Some(Body::Raw(b"x".to_vec())), files);
        assert!(matches!(result, Err(InvalidInputError::Body { .. })));
    }

    #[test]
    fn bad_mime_type_is_rejected() {
        let builder = reqwest::Client::new().post("http://localhost/upload");
        let files = vec![FilePart::new("file", "rules.xml", Vec::new()).mime("not a mime")];
        assert!(attach_body(builder, None, files).is_err());
    }
}

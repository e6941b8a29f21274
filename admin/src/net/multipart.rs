//! Multipart payload assembly for product creation.
//!
//! DESIGN
//! ======
//! The payload is built as plain Rust data first (ordered named parts) and
//! only converted to a browser `FormData` at send time. Part order is part
//! of the backend contract: scalar fields, then one `images` part per file,
//! then the JSON-encoded `attributes` array.

#[cfg(test)]
#[path = "multipart_test.rs"]
mod multipart_test;

use crate::state::product_form::ProductDraft;

/// The body of one multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File { file_name: String, mime_type: String, bytes: Vec<u8> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub name: &'static str,
    pub value: PartValue,
}

impl Part {
    fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: PartValue::Text(value.into()) }
    }
}

/// Ordered multipart form parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    pub parts: Vec<Part>,
}

impl MultipartPayload {
    /// Package a validated draft.
    ///
    /// # Errors
    ///
    /// Returns an error string if the attribute list cannot be JSON-encoded.
    pub fn from_draft(draft: &ProductDraft) -> Result<Self, String> {
        let mut parts = vec![
            Part::text("title", draft.title.as_str()),
            Part::text("description", draft.description.as_str()),
            Part::text("brand", draft.brand.as_str()),
            Part::text("category", draft.category.as_str()),
        ];
        parts.extend(draft.images.iter().map(|img| Part {
            name: "images",
            value: PartValue::File {
                file_name: img.file_name.clone(),
                mime_type: img.mime_type.clone(),
                bytes: img.bytes.clone(),
            },
        }));
        let attributes = serde_json::to_string(&draft.attributes).map_err(|e| e.to_string())?;
        parts.push(Part::text("attributes", attributes));
        Ok(Self { parts })
    }

    /// First text value for `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|p| matches!(p.value, PartValue::File { .. }))
            .count()
    }

    /// Convert to a browser `FormData` for `fetch`.
    ///
    /// # Errors
    ///
    /// Returns an error string if any browser API call fails.
    #[cfg(feature = "hydrate")]
    pub fn to_form_data(&self) -> Result<web_sys::FormData, String> {
        let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
        for part in &self.parts {
            let appended = match &part.value {
                PartValue::Text(value) => form.append_with_str(part.name, value),
                PartValue::File { file_name, mime_type, bytes } => {
                    let blob = bytes_to_blob(bytes, mime_type)?;
                    form.append_with_blob_and_filename(part.name, &blob, file_name)
                }
            };
            appended.map_err(|e| format!("{e:?}"))?;
        }
        Ok(form)
    }
}

#[cfg(feature = "hydrate")]
fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<web_sys::Blob, String> {
    let chunks = js_sys::Array::new();
    chunks.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options).map_err(|e| format!("{e:?}"))
}

//! In-memory staging for product images picked or dropped on the form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dropzone component reads browser `File`s into bytes before handing
//! them to this module, so staged images are plain data that can live in
//! reactive signals and be packaged into the multipart payload later.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

/// A file accepted by the dropzone, before it is assigned a staging id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Object URL for the preview thumbnail (browser only).
    pub preview_url: Option<String>,
}

/// A staged image with a stable local id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedImage {
    pub id: u64,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub preview_url: Option<String>,
}

impl StagedImage {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// What the preview grid needs, without the file bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePreview {
    pub id: u64,
    pub file_name: String,
    pub preview_url: Option<String>,
}

/// Ordered set of staged images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageStage {
    images: Vec<StagedImage>,
    next_id: u64,
}

impl ImageStage {
    pub fn images(&self) -> &[StagedImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StagedImage> {
        self.images.iter()
    }

    pub fn previews(&self) -> Vec<ImagePreview> {
        self.images
            .iter()
            .map(|img| ImagePreview {
                id: img.id,
                file_name: img.file_name.clone(),
                preview_url: img.preview_url.clone(),
            })
            .collect()
    }

    /// Replace the staged set with a new drop, keeping drop order.
    ///
    /// Returns the images that were displaced so their previews can be released.
    pub fn stage(&mut self, files: Vec<NewImage>) -> Vec<StagedImage> {
        let staged = files
            .into_iter()
            .map(|file| {
                let id = self.next_id;
                self.next_id += 1;
                StagedImage {
                    id,
                    file_name: file.file_name,
                    mime_type: file.mime_type,
                    bytes: file.bytes,
                    preview_url: file.preview_url,
                }
            })
            .collect();
        std::mem::replace(&mut self.images, staged)
    }

    /// Remove one image by id.
    pub fn remove(&mut self, id: u64) -> Option<StagedImage> {
        let pos = self.images.iter().position(|img| img.id == id)?;
        Some(self.images.remove(pos))
    }

    /// Drop every staged image, returning them.
    pub fn clear(&mut self) -> Vec<StagedImage> {
        std::mem::take(&mut self.images)
    }
}

/// Release preview object URLs held by `images`.
pub fn release_previews(images: &[StagedImage]) {
    #[cfg(feature = "hydrate")]
    {
        for url in images.iter().filter_map(|img| img.preview_url.as_deref()) {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = images;
    }
}

use gloo_file::{File as GlooFile, ObjectUrl};
use thiserror::Error;

/// No file was present at selection time. Callers treat this as a silent
/// no-op rather than surfacing it.
#[derive(Debug, Error)]
#[error("no file present at selection")]
pub struct InvalidInputError;

/// A user-picked leaf image together with the object URL used to preview
/// it. `ObjectUrl` revokes the browser-side URL when dropped, so replacing
/// one `SelectedImage` with another releases the previous preview resource.
pub struct SelectedImage {
    file: GlooFile,
    preview: ObjectUrl,
}

impl SelectedImage {
    pub fn select(file: Option<GlooFile>) -> Result<Self, InvalidInputError> {
        let file = file.ok_or(InvalidInputError)?;
        let preview = ObjectUrl::from(file.clone());
        Ok(Self { file, preview })
    }

    pub fn file(&self) -> &GlooFile {
        &self.file
    }

    pub fn name(&self) -> String {
        self.file.name()
    }

    pub fn preview_url(&self) -> String {
        self.preview.to_string()
    }
}

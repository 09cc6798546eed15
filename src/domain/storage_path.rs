use std::fmt;

use uuid::Uuid;

use super::{AudioFormat, UploadId};

/// Name of a stored upload, always `<uuid>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    id: UploadId,
    format: AudioFormat,
    name: String,
}

impl StoragePath {
    pub fn new(id: &UploadId, format: AudioFormat) -> Self {
        Self {
            id: *id,
            format,
            name: format!("{}.{}", id.as_uuid(), format.extension()),
        }
    }

    /// Parses a client-supplied file name. Anything other than a bare
    /// UUID with an accepted extension is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let (stem, ext) = raw.rsplit_once('.')?;
        let format = AudioFormat::from_extension(ext)?;
        let uuid = Uuid::try_parse(stem).ok()?;
        Some(Self::new(&UploadId::from_uuid(uuid), format))
    }

    pub fn upload_id(&self) -> UploadId {
        self.id
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

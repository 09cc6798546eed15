use bytes::Bytes;
use uuid::Uuid;

use super::AudioFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub id: UploadId,
    pub original_filename: String,
    pub format: AudioFormat,
    pub data: Bytes,
}

impl UploadedAudio {
    pub fn new(original_filename: String, format: AudioFormat, data: Bytes) -> Self {
        Self {
            id: UploadId::new(),
            original_filename,
            format,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}

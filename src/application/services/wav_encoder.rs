use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::TranscriptionError;
use crate::domain::NormalizedAudio;

/// Encodes normalized audio as a 16-bit PCM mono WAV file in memory.
pub fn encode_wav(audio: &NormalizedAudio) -> Result<Vec<u8>, TranscriptionError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::with_capacity(44 + audio.samples.len() * 2));
    {
        let mut writer = WavWriter::new(&mut buffer, spec)
            .map_err(|e| TranscriptionError::EncodingFailed(format!("header: {}", e)))?;

        for &sample in &audio.samples {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .map_err(|e| TranscriptionError::EncodingFailed(format!("sample: {}", e)))?;
        }

        writer
            .finalize()
            .map_err(|e| TranscriptionError::EncodingFailed(format!("finalize: {}", e)))?;
    }

    Ok(buffer.into_inner())
}

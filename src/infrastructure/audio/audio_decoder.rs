use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::{AudioFormat, NormalizedAudio};

pub const TARGET_SAMPLE_RATE: u32 = 16_000;

const RESAMPLE_CHUNK_SIZE: usize = 1024;

/// Decodes any container symphonia can probe into 16kHz mono `f32` PCM.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioDecoder;

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(
        &self,
        data: &[u8],
        format: AudioFormat,
    ) -> Result<NormalizedAudio, AudioDecoderError> {
        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        hint.with_extension(format.extension());
        hint.mime_type(format.as_mime());

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("probe: {}", e)))?;

        let mut reader = probed.format;

        let track = reader
            .default_track()
            .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let source_rate = codec_params
            .sample_rate
            .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("codec: {}", e)))?;

        let mut mono: Vec<f32> = Vec::new();

        loop {
            let packet = match reader.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }
            let channels = spec.channels.count().max(1);

            let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            let samples = sample_buf.samples();

            if channels > 1 {
                mono.extend(
                    samples
                        .chunks(channels)
                        .map(|frame| frame.iter().sum::<f32>() / channels as f32),
                );
            } else {
                mono.extend_from_slice(samples);
            }
        }

        if mono.is_empty() {
            tracing::debug!(format = %format, "Container decoded without any audio frames");
            return Ok(NormalizedAudio::new(Vec::new(), TARGET_SAMPLE_RATE));
        }

        if source_rate != TARGET_SAMPLE_RATE {
            mono = resample(&mono, source_rate, TARGET_SAMPLE_RATE)?;
        }

        let audio = NormalizedAudio::new(mono, TARGET_SAMPLE_RATE);

        tracing::debug!(
            format = %format,
            source_rate,
            samples = audio.samples.len(),
            duration_secs = audio.duration_secs(),
            "Audio decoded to 16kHz mono PCM"
        );

        Ok(audio)
    }
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, AudioDecoderError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let expected_len = (samples.len() as u64 * to_rate as u64 / from_rate as u64) as usize;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, RESAMPLE_CHUNK_SIZE, 1)
        .map_err(|e| AudioDecoderError::ResamplingFailed(format!("init: {}", e)))?;

    let delay = resampler.output_delay();
    let mut output = Vec::with_capacity(expected_len + delay + RESAMPLE_CHUNK_SIZE);

    for chunk in samples.chunks(RESAMPLE_CHUNK_SIZE) {
        let mut input = chunk.to_vec();
        input.resize(RESAMPLE_CHUNK_SIZE, 0.0);
        process_chunk(&mut resampler, input, &mut output)?;
    }

    // Flush the filter so the tail survives the delay trim.
    while output.len() < expected_len + delay {
        let before = output.len();
        process_chunk(&mut resampler, vec![0.0; RESAMPLE_CHUNK_SIZE], &mut output)?;
        if output.len() == before {
            break;
        }
    }

    output.drain(..delay.min(output.len()));
    output.truncate(expected_len);

    Ok(output)
}

fn process_chunk(
    resampler: &mut rubato::SincFixedIn<f32>,
    input: Vec<f32>,
    output: &mut Vec<f32>,
) -> Result<(), AudioDecoderError> {
    use rubato::Resampler;

    let result = resampler
        .process(&[input], None)
        .map_err(|e| AudioDecoderError::ResamplingFailed(e.to_string()))?;

    if let Some(channel) = result.first() {
        output.extend_from_slice(channel);
    }

    Ok(())
}

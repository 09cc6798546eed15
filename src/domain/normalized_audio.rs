/// Mono linear PCM produced by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl NormalizedAudio {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

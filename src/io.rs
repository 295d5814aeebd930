//! Loading audio files into [`Signal`]s.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, SignalError};
use crate::signals::Signal;

/// Reads a WAV file into a signal at the file's sample rate.
///
/// Only the first channel is kept. Integer samples are scaled to `[-1.0, 1.0]`
/// by the full-scale value of their bit depth; float samples are used as-is.
/// The signal spans `(0, frames / sample_rate)`.
///
/// # Errors
///
/// * `Wav` if the file cannot be opened or decoded
/// * `EmptySignal` if the file holds no samples
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let mut reader = hound::WavReader::open(path.as_ref())?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1u64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / full_scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    if interleaved.is_empty() {
        return Err(SignalError::EmptySignal);
    }

    let samples: Vec<f64> = interleaved
        .into_iter()
        .step_by(usize::from(spec.channels.max(1)))
        .collect();

    debug!(
        path = %path.as_ref().display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        frames = samples.len(),
        "read WAV file"
    );
    Signal::from_raw(f64::from(spec.sample_rate), samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("samplekit-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_reads_first_channel() {
        let path = temp_path("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..80 {
            writer.write_sample(i as i16 * 100).unwrap();
            writer.write_sample(-1i16).unwrap();
        }
        writer.finalize().unwrap();

        let signal = read_wav(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(signal.len(), 80);
        assert_eq!(signal.sampling_rate(), 8000.0);
        assert_eq!(signal.duration().end(), 0.01);
        assert!((signal.samples()[1] - 100.0 / 32768.0).abs() < 1e-12);
    }

    #[test]
    fn test_reads_float_samples() {
        let path = temp_path("float.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 100,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for v in [0.5f32, -0.25, 1.0] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        let signal = read_wav(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(signal.samples(), &[0.5, -0.25, 1.0]);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_wav(temp_path("does-not-exist.wav")),
            Err(SignalError::Wav(_))
        ));
    }
}

use std::f64::consts::PI;

use samplekit::{
    Convolver, GeneratorConfig, Quantizer, Resampler, Signal, SignalError, SpectralAnalyzer,
    WaveformGenerator, WaveformKind, sweep,
};

#[test]
fn test_time_base_length_property() -> anyhow::Result<()> {
    let mut generator = WaveformGenerator::with_config(GeneratorConfig::default().with_seed(1));
    for (duration, rate) in [
        ((0.0, 1.0), 1000.0),
        ((-6.0, 6.0), 1000.0),
        ((0.0, 12.0), 250.0),
        ((2.5, 3.0), 44100.0),
        ((0.0, 10.0), 7.0),
    ] {
        let expected = (rate * (duration.1 - duration.0) as f64).floor() as usize;
        let signal = generator.generate(WaveformKind::Noise, 1.0, duration, rate)?;
        assert_eq!(signal.len(), expected);
        assert_eq!(signal.timestamps().len(), expected);
    }
    Ok(())
}

#[test]
fn test_addition_is_commutative_and_associative() -> anyhow::Result<()> {
    let generator = WaveformGenerator::new();
    let a = generator.sine(1.0, 0.1, 0.0, (0.0, 10.0), 100.0)?;
    let b = generator.sine(4.0, 0.125, PI / 2.0, (0.0, 10.0), 100.0)?;
    let c = generator.triangle(1.0, 0.5, 0.7, (0.0, 10.0), 100.0)?;

    assert_eq!((&a + &b)?.samples(), (&b + &a)?.samples());

    let left = (&(&a + &b)? + &c)?;
    let right = (&a + &(&b + &c)?)?;
    for (x, y) in left.samples().iter().zip(right.samples()) {
        assert!((x - y).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn test_addition_mismatch() -> anyhow::Result<()> {
    let generator = WaveformGenerator::new();
    let a = generator.sine(1.0, 1.0, 0.0, (0.0, 1.0), 100.0)?;
    let other_rate = generator.sine(1.0, 1.0, 0.0, (0.0, 1.0), 200.0)?;
    let other_span = generator.sine(1.0, 1.0, 0.0, (0.0, 2.0), 100.0)?;
    assert!(matches!(&a + &other_rate, Err(SignalError::IncompatibleSignal(_))));
    assert!(matches!(&a + &other_span, Err(SignalError::IncompatibleSignal(_))));
    Ok(())
}

#[test]
fn test_square_wave_scenario() -> anyhow::Result<()> {
    let square = WaveformGenerator::new().square(1.0, 1.0 / 6.0, 0.3, (0.0, 12.0), 1000.0)?;
    assert!(square.samples().iter().all(|&s| s == -1.0 || s == 1.0));
    assert!(square.samples().contains(&1.0));
    assert!(square.samples().contains(&-1.0));
    Ok(())
}

#[test]
fn test_aliasing_scenario() -> anyhow::Result<()> {
    let mut sine = WaveformGenerator::new().sine(1.0, 10.0, 0.0, (0.0, 1.0), 1000.0)?;
    Resampler::new().resample(&mut sine, 20.0)?;
    let analyzer = SpectralAnalyzer::new();
    let (_, magnitudes) = analyzer.analyze(&mut sine, false)?;
    // Sampling at exactly twice the tone lands on its zero crossings
    let strongest = magnitudes.iter().cloned().fold(0.0, f64::max);
    if strongest > 1e-6 {
        assert_ne!(analyzer.peak_frequency(&sine)?.abs(), 10.0);
    } else {
        assert!(sine.samples().iter().all(|s| s.abs() < 1e-9));
    }
    Ok(())
}

#[test]
fn test_constant_quantization_scenario() -> anyhow::Result<()> {
    let mut signal = Signal::from_raw(100.0, vec![-0.3; 50])?;
    Quantizer::quantize(&mut signal, 8)?;
    assert!(signal.samples().iter().all(|&s| s == -0.3));
    assert!(signal.is_digital());
    Ok(())
}

#[test]
fn test_convolution_length() -> anyhow::Result<()> {
    let generator = WaveformGenerator::new();
    for (la, lb) in [(1.0, 1.0), (0.5, 0.25), (0.013, 0.9)] {
        let a = generator.sine(1.0, 100.0, 0.0, (0.0, la), 1000.0)?;
        let b = generator.sine(1.0, 10.0, 0.0, (0.0, lb), 1000.0)?;
        let out = Convolver::convolve(&a, &b)?;
        assert_eq!(out.len(), a.len() + b.len() - 1);
    }
    Ok(())
}

#[test]
fn test_quantize_then_analyze_then_reconstruct() -> anyhow::Result<()> {
    let mut signal = WaveformGenerator::new().sine(1.0, 5.0, 0.0, (0.0, 1.0), 100.0)?;
    Quantizer::quantize(&mut signal, 4)?;
    let quantized = signal.samples().to_vec();
    let analyzer = SpectralAnalyzer::new();
    analyzer.analyze(&mut signal, false)?;
    analyzer.reconstruct(&mut signal, 50.0)?;
    for (x, y) in quantized.iter().zip(signal.samples()) {
        assert!((x - y).abs() < 1e-9);
    }
    assert!(signal.is_digital());
    Ok(())
}

#[test]
fn test_multi_rate_sweep_pipeline() -> anyhow::Result<()> {
    let sine = WaveformGenerator::new().sine(1.0, 10.0, PI / 6.0, (0.0, 1.0), 1000.0)?;
    let mut copies = sweep::resample_sweep(&sine, &[10.0, 20.0, 21.0, 40.0, 80.0, 200.0], true)?;
    sweep::lowpass_all(&mut copies, 11.0)?;
    for copy in &copies {
        assert_eq!(copy.len(), copy.timestamps().len());
        assert!(copy.samples().iter().all(|s| s.is_finite()));
    }
    Ok(())
}

#[cfg(feature = "wav")]
#[test]
fn test_wav_round_trip() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("samplekit-it-{}.wav", std::process::id()));
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 441,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec)?;
    for i in 0..441 {
        let v = (2.0 * PI * 3.0 * i as f64 / 441.0).sin();
        writer.write_sample((v * 16000.0) as i16)?;
    }
    writer.finalize()?;

    let mut signal = samplekit::read_wav(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(signal.len(), 441);
    Resampler::new().resample(&mut signal, 100.0)?;
    let analyzer = SpectralAnalyzer::new();
    analyzer.analyze(&mut signal, false)?;
    assert_eq!(analyzer.peak_frequency(&signal)?.abs(), 3.0);
    Ok(())
}

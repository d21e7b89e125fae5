use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat};
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::HeapRb;

pub type AudioProducer = ringbuf::HeapProd<f32>;
pub type AudioConsumer = ringbuf::HeapCons<f32>;

/// Buffer capacity in seconds of device-rate audio; synthesized clips
/// longer than this are truncated at enqueue time.
const BUFFER_SECONDS: usize = 60;

pub struct AudioOutput {
    _stream: cpal::Stream,
    sample_rate_hz: u32,
    channels: u16,
}

impl AudioOutput {
    pub fn new() -> Result<(Self, AudioProducer), String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| "No default output device".to_string())?;

        let supported = device
            .default_output_config()
            .map_err(|e| format!("Failed to get default output config: {e}"))?;

        let sample_rate_hz = supported.sample_rate().0;
        let sample_format = supported.sample_format();
        let config: cpal::StreamConfig = supported.into();
        let channels = config.channels;

        let rb = HeapRb::<f32>::new(sample_rate_hz as usize * channels as usize * BUFFER_SECONDS);
        let (producer, consumer) = rb.split();

        let err_fn = |err| {
            eprintln!("audio stream error: {err}");
        };

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(device, &config, consumer, err_fn)?,
            SampleFormat::I16 => build_stream::<i16>(device, &config, consumer, err_fn)?,
            SampleFormat::U16 => build_stream::<u16>(device, &config, consumer, err_fn)?,
            other => return Err(format!("Unsupported sample format: {other}")),
        };

        stream
            .play()
            .map_err(|e| format!("Failed to start audio stream: {e}"))?;

        Ok((
            Self {
                _stream: stream,
                sample_rate_hz,
                channels,
            },
            producer,
        ))
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}

/// Linear interpolation from `src_hz` to `dst_hz`. Good enough for
/// synthesized speech; equal rates pass the input through unchanged.
pub fn resample_linear(samples: &[f32], src_hz: u32, dst_hz: u32) -> Vec<f32> {
    if samples.is_empty() || src_hz == 0 || dst_hz == 0 {
        return Vec::new();
    }
    if src_hz == dst_hz {
        return samples.to_vec();
    }

    let ratio = src_hz as f64 / dst_hz as f64;
    let out_len = ((samples.len() as f64) / ratio).floor() as usize;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * ratio;
        let idx = pos as usize;
        let frac = (pos - idx as f64) as f32;
        let a = samples[idx];
        let b = samples.get(idx + 1).copied().unwrap_or(a);
        out.push(a + (b - a) * frac);
    }
    out
}

/// Pushes mono samples, duplicating across output channels. Samples that
/// do not fit in the ring buffer are dropped.
pub fn enqueue_mono(producer: &mut AudioProducer, samples: &[f32], channels: u16) {
    if samples.is_empty() {
        return;
    }
    let ch = channels as usize;
    if ch <= 1 {
        let _ = producer.push_slice(samples);
    } else {
        for &s in samples {
            for _ in 0..ch {
                let _ = producer.try_push(s);
            }
        }
    }
}

fn build_stream<T>(
    device: cpal::Device,
    config: &cpal::StreamConfig,
    mut consumer: AudioConsumer,
    err_fn: impl FnMut(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, String>
where
    T: Sample + FromSample<f32> + cpal::SizedSample,
{
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _| {
                for sample in data.iter_mut() {
                    let s = consumer.try_pop().unwrap_or(0.0);
                    *sample = T::from_sample(s);
                }
            },
            err_fn,
            None,
        )
        .map_err(|e| format!("Failed to build output stream: {e}"))
}

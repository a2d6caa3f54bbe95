//! Speaker output through the platform's default audio device.
//!
//! The device stream lives on its own thread and drains a shared sample
//! queue; the sink only appends to that queue. Device support is compiled
//! in with the `speaker` feature. Without it, opening always fails and the
//! caller falls back to another output.

use super::sink::AudioSink;
use super::ToneSpec;
use crate::error::AudioError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError, mpsc};
use tracing::{debug, instrument};

/// Samples waiting for the device, in playback order.
type Queue = Arc<Mutex<VecDeque<f32>>>;

/// Plays tones on the default output device.
#[derive(Debug)]
pub struct SpeakerSink {
    queue: Queue,
    sample_rate: u32,
    /// Dropping the sender stops the device thread.
    _stop: mpsc::Sender<()>,
}

impl SpeakerSink {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Fails when there is no output device, the device rejects every
    /// supported sample format, or the stream cannot be started.
    #[cfg(feature = "speaker")]
    #[instrument]
    pub fn open() -> Result<Self, AudioError> {
        let queue = Queue::default();
        let device_queue = Arc::clone(&queue);
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        std::thread::Builder::new()
            .name("victory-chime".into())
            .spawn(move || match device::start(device_queue) {
                Ok((stream, sample_rate)) => {
                    if ready_tx.send(Ok(sample_rate)).is_ok() {
                        // Blocks until the sink is dropped.
                        stop_rx.recv().ok();
                    }
                    drop(stream);
                }
                Err(error) => {
                    ready_tx.send(Err(error)).ok();
                }
            })?;

        let sample_rate = ready_rx
            .recv()
            .map_err(|_| AudioError::new("audio thread exited before opening the device"))??;
        tracing::info!(sample_rate, "Speaker opened");
        Ok(Self::from_parts(queue, sample_rate, stop_tx))
    }

    /// Always fails: this build has no device support.
    #[cfg(not(feature = "speaker"))]
    #[instrument]
    pub fn open() -> Result<Self, AudioError> {
        Err(AudioError::new("speaker output needs the `speaker` feature"))
    }

    #[cfg_attr(not(feature = "speaker"), allow(dead_code))]
    fn from_parts(queue: Queue, sample_rate: u32, stop: mpsc::Sender<()>) -> Self {
        Self {
            queue,
            sample_rate,
            _stop: stop,
        }
    }

    /// Rate the device plays at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl AudioSink for SpeakerSink {
    #[instrument(skip_all, fields(device_rate = self.sample_rate))]
    fn play(&mut self, tone: &ToneSpec, samples: &[f32]) -> Result<(), AudioError> {
        let rendered;
        let samples = if *tone.sample_rate() == self.sample_rate {
            samples
        } else {
            rendered = tone.clone().with_sample_rate(self.sample_rate).samples();
            &rendered
        };

        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.extend(samples.iter().copied());
        debug!(queued = queue.len(), "Tone queued");
        Ok(())
    }
}

/// Fills interleaved `frames` from `queue`, one mono sample per frame copied to
/// every channel. Frames past the end of the queue get silence.
#[cfg_attr(not(feature = "speaker"), allow(dead_code))]
fn drain_into<T: Copy>(
    queue: &mut VecDeque<f32>,
    frames: &mut [T],
    channels: usize,
    convert: impl Fn(f32) -> T,
) {
    for frame in frames.chunks_mut(channels.max(1)) {
        frame.fill(convert(queue.pop_front().unwrap_or(0.0)));
    }
}

#[cfg(feature = "speaker")]
mod device {
    use super::{Queue, drain_into};
    use crate::error::AudioError;
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use cpal::{FromSample, Sample, SampleFormat, SizedSample, Stream};
    use std::sync::PoisonError;
    use tracing::warn;

    /// Starts a playing stream on the default device, returning it with its rate.
    pub(super) fn start(queue: Queue) -> Result<(Stream, u32), AudioError> {
        let device = cpal::default_host()
            .default_output_device()
            .ok_or_else(|| AudioError::new("no default output device"))?;
        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::new(format!("no output config: {}", e)))?;
        let config = supported.config();

        let stream = match supported.sample_format() {
            SampleFormat::F32 => build::<f32>(&device, &config, queue)?,
            SampleFormat::I16 => build::<i16>(&device, &config, queue)?,
            SampleFormat::U16 => build::<u16>(&device, &config, queue)?,
            other => {
                return Err(AudioError::new(format!("unsupported sample format {}", other)));
            }
        };
        stream
            .play()
            .map_err(|e| AudioError::new(format!("cannot start output stream: {}", e)))?;
        Ok((stream, config.sample_rate.0))
    }

    fn build<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        queue: Queue,
    ) -> Result<Stream, AudioError>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = usize::from(config.channels);
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let mut queue = queue.lock().unwrap_or_else(PoisonError::into_inner);
                    drain_into(&mut queue, data, channels, |s| T::from_sample(s));
                },
                |error| warn!(%error, "Output stream error"),
                None,
            )
            .map_err(|e| AudioError::new(format!("cannot build output stream: {}", e)))
    }
}

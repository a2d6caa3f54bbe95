//! Audio outputs for the victory tone.
//!
//! Sinks are opened lazily through a [`SinkFactory`] and may fail to open
//! or to play; callers treat every failure as non-fatal.

use super::ToneSpec;
use super::speaker::SpeakerSink;
use crate::error::AudioError;
use serde::{Deserialize, Serialize};
use std::io::{IsTerminal, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Destination for a rendered tone.
pub trait AudioSink: Send {
    /// Plays (or stores) the rendered samples of `tone`.
    fn play(&mut self, tone: &ToneSpec, samples: &[f32]) -> Result<(), AudioError>;
}

/// Opens an [`AudioSink`] on first use.
pub trait SinkFactory: Send {
    /// Opens the output. May fail when no device is available.
    fn open(&mut self) -> Result<Box<dyn AudioSink>, AudioError>;
}

/// Which output the chime plays through.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioOutput {
    /// Default audio device, or the terminal bell when there is none.
    #[default]
    Speaker,
    /// Terminal bell on stdout.
    Bell,
    /// Discard the tone.
    #[serde(rename = "none")]
    Silent,
    /// Write the tone to a WAV file.
    Wav(PathBuf),
}

impl SinkFactory for AudioOutput {
    #[instrument(skip(self), fields(output = ?self))]
    fn open(&mut self) -> Result<Box<dyn AudioSink>, AudioError> {
        match self {
            AudioOutput::Speaker => open_or_fallback(
                SpeakerSink::open().map(|sink| Box::new(sink) as Box<dyn AudioSink>),
                || Ok(Box::new(BellSink::stdout()?)),
            ),
            AudioOutput::Bell => Ok(Box::new(BellSink::stdout()?)),
            AudioOutput::Silent => Ok(Box::new(NullSink)),
            AudioOutput::Wav(path) => Ok(Box::new(WavFileSink::create(path.clone())?)),
        }
    }
}

/// Returns `primary` if it opened, otherwise logs why and opens `fallback`.
fn open_or_fallback(
    primary: Result<Box<dyn AudioSink>, AudioError>,
    fallback: impl FnOnce() -> Result<Box<dyn AudioSink>, AudioError>,
) -> Result<Box<dyn AudioSink>, AudioError> {
    primary.or_else(|error| {
        warn!(%error, "Primary audio output unavailable, falling back");
        fallback()
    })
}

/// Discards every tone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _tone: &ToneSpec, samples: &[f32]) -> Result<(), AudioError> {
        debug!(samples = samples.len(), "Tone discarded");
        Ok(())
    }
}

/// Rings the terminal bell; the closest thing a terminal has to a speaker.
#[derive(Debug)]
pub struct BellSink<W = Stdout> {
    out: W,
}

impl BellSink<Stdout> {
    /// Opens the bell on stdout, failing when stdout is not a terminal.
    #[instrument]
    pub fn stdout() -> Result<Self, AudioError> {
        let out = std::io::stdout();
        if !out.is_terminal() {
            return Err(AudioError::new("stdout is not a terminal, no bell available"));
        }
        Ok(Self { out })
    }
}

impl<W: Write + Send> BellSink<W> {
    /// Rings the bell on an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> AudioSink for BellSink<W> {
    fn play(&mut self, _tone: &ToneSpec, _samples: &[f32]) -> Result<(), AudioError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes each tone to a 16-bit mono PCM WAV file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct WavFileSink {
    path: PathBuf,
}

impl WavFileSink {
    /// Opens the sink, checking that `path` is writable.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn create(path: PathBuf) -> Result<Self, AudioError> {
        std::fs::File::create(&path).map_err(|e| {
            AudioError::new(format!("cannot create {}: {}", path.display(), e))
        })?;
        Ok(Self { path })
    }

    /// Target file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioSink for WavFileSink {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn play(&mut self, tone: &ToneSpec, samples: &[f32]) -> Result<(), AudioError> {
        let bytes = encode_wav(*tone.sample_rate(), samples);
        std::fs::write(&self.path, &bytes)?;
        info!(bytes = bytes.len(), "Tone written");
        Ok(())
    }
}

const WAV_HEADER_LEN: usize = 44;

/// Encodes mono samples as a 16-bit PCM WAV file.
///
/// Samples outside -1.0..=1.0 are clipped.
pub fn encode_wav(sample_rate: u32, samples: &[f32]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(WAV_HEADER_LEN + samples.len() * 2);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&sample_rate.saturating_mul(2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16;
        out.extend_from_slice(&pcm.to_le_bytes());
    }
    out
}

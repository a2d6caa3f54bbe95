//! Victory chime: plays the tone when the engine reports a win.

use super::sink::{AudioSink, SinkFactory};
use super::ToneSpec;
use crate::error::AudioError;
use crate::games::tictactoe::{Mark, VictoryListener};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of the chime's output.
enum Output {
    /// Not opened yet; opened on the first win.
    Pending(Box<dyn SinkFactory>),
    /// Opened and playing.
    Ready(Box<dyn AudioSink>),
    /// Opening failed; further wins are silent.
    Unavailable,
}

/// Best-effort victory sound.
///
/// The output is opened on the first win. Failures are logged and
/// swallowed, so a missing device never reaches the game.
pub struct VictoryChime {
    tone: ToneSpec,
    samples: Vec<f32>,
    output: Output,
}

impl VictoryChime {
    /// Creates a chime that opens its output through `factory` on first use.
    #[instrument(skip(factory))]
    pub fn new(tone: ToneSpec, factory: impl SinkFactory + 'static) -> Self {
        Self {
            tone,
            samples: Vec::new(),
            output: Output::Pending(Box::new(factory)),
        }
    }

    /// False once the output has failed to open.
    pub fn is_available(&self) -> bool {
        !matches!(self.output, Output::Unavailable)
    }

    /// Plays the tone, opening the output if needed.
    ///
    /// # Errors
    ///
    /// Returns an [`AudioError`] when the output cannot be opened, has
    /// previously failed to open, or fails to play.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<(), AudioError> {
        if let Output::Pending(factory) = &mut self.output {
            match factory.open() {
                Ok(sink) => {
                    info!("Audio output opened");
                    self.output = Output::Ready(sink);
                }
                Err(e) => {
                    self.output = Output::Unavailable;
                    return Err(e);
                }
            }
        }

        match &mut self.output {
            Output::Ready(sink) => {
                if self.samples.is_empty() {
                    self.samples = self.tone.samples();
                }
                sink.play(&self.tone, &self.samples)
            }
            Output::Unavailable => Err(AudioError::new("audio output unavailable")),
            Output::Pending(_) => Ok(()),
        }
    }
}

impl VictoryListener for VictoryChime {
    fn on_victory(&mut self, winner: Mark) {
        if !self.is_available() {
            debug!(%winner, "Audio unavailable, chime skipped");
            return;
        }
        if let Err(error) = self.play() {
            warn!(%winner, %error, "Victory chime failed");
        }
    }
}

impl std::fmt::Debug for VictoryChime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = match self.output {
            Output::Pending(_) => "pending",
            Output::Ready(_) => "ready",
            Output::Unavailable => "unavailable",
        };
        f.debug_struct("VictoryChime")
            .field("tone", &self.tone)
            .field("output", &output)
            .finish()
    }
}

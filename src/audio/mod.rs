//! Audio collaborator: the victory tone and where it is played.

mod chime;
mod sink;
mod speaker;
mod tone;

pub use chime::VictoryChime;
pub use sink::{encode_wav, AudioOutput, AudioSink, BellSink, NullSink, SinkFactory, WavFileSink};
pub use speaker::SpeakerSink;
pub use tone::ToneSpec;

//! Speech-to-speech: re-voice recorded audio with another voice.

mod client;
mod types;

pub use types::SpeechToSpeechRequest;

//! Text-to-speech: buffered and streamed synthesis of a text into audio.

mod client;
mod types;

pub use types::TextToSpeechRequest;

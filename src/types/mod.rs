//! Types shared by several endpoint groups.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`VoiceSettings`] | Stability / similarity knobs sent with synthesis requests |
//! | [`OutputFormat`] | Codec, sample rate and bitrate of returned audio |
//! | [`SynthesisOptions`] | Query options accepted by TTS and STS calls |

pub mod audio;
pub mod voice;

pub use audio::{OutputFormat, SynthesisOptions};
pub use voice::VoiceSettings;

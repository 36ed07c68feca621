//! Voice library: listing voices and managing their settings.

mod client;
mod types;

pub use types::{Voice, VoiceSample};

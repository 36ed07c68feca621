//! Client entry point for the ElevenLabs API.
//!
//! Endpoint groups (`tts`, `sts`, `history`, `voices`, `models`, `user`) add
//! their methods to [`ElevenLabsClient`] from their own modules.

pub mod builder;
pub mod core;

pub use builder::ElevenLabsClientBuilder;
pub use core::ElevenLabsClient;

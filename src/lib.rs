//! # elevenlabs-lib-rust
//!
//! Async client for the ElevenLabs text-to-speech API.
//!
//! ## Overview
//!
//! All synthesis happens on the remote service; this crate builds the HTTP
//! requests, attaches the API key, and hands back either the whole audio
//! payload or a byte stream copied into a sink you own.
//!
//! - **Buffered synthesis**: [`ElevenLabsClient::text_to_speech`] returns the audio as [`bytes::Bytes`]
//! - **Streamed synthesis**: [`ElevenLabsClient::text_to_speech_stream`] copies audio into any
//!   [`tokio::io::AsyncWrite`] as it arrives
//! - **Speech-to-speech**: [`ElevenLabsClient::speech_to_speech`] re-voices recorded audio
//! - **History paging**: [`ElevenLabsClient::get_history`] plus [`HistoryCursor`] for the next pages
//! - **Voices, models, account**: listing and settings endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_lib_rust::{ElevenLabsClient, TextToSpeechRequest};
//!
//! #[tokio::main]
//! async fn main() -> elevenlabs_lib_rust::Result<()> {
//!     let client = ElevenLabsClient::builder()
//!         .api_key("your-api-key")
//!         .timeout_secs(30)
//!         .build()?;
//!
//!     let request = TextToSpeechRequest::new("Hello, world!", "eleven_monolingual_v1");
//!     let audio = client.text_to_speech("pNInz6obpgDQGcFmaJgB", &request).await?;
//!     tokio::fs::write("adam.mp3", &audio).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client and builder |
//! | [`config`] | Credential, base URL and timeout configuration |
//! | [`tts`] | Text-to-speech requests |
//! | [`sts`] | Speech-to-speech requests |
//! | [`history`] | History pages, cursor and item downloads |
//! | [`voices`] | Voice listing and settings |
//! | [`models`] | Model listing |
//! | [`user`] | Account and subscription |
//! | [`types`] | Voice settings and output formats shared by calls |

pub mod client;
pub mod config;
pub mod error_code;
pub mod history;
pub mod models;
pub mod sts;
pub mod transport;
pub mod tts;
pub mod types;
pub mod user;
pub mod voices;

// Re-export main types for convenience
pub use client::{ElevenLabsClient, ElevenLabsClientBuilder};
pub use config::{ApiKey, ClientConfig};
pub use error_code::RemoteErrorKind;
pub use history::{HistoryCursor, HistoryItem, HistoryPage, HistoryQuery};
pub use models::Model;
pub use sts::SpeechToSpeechRequest;
pub use tts::TextToSpeechRequest;
pub use types::{OutputFormat, SynthesisOptions, VoiceSettings};
pub use user::{Subscription, User};
pub use voices::Voice;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

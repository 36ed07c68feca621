//! Integration tests against a mock HTTP server


mod account;
mod history;
mod text_to_speech;

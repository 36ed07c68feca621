//! Synthesis models available to the account.

mod client;
mod types;

pub use types::{Model, ModelLanguage};

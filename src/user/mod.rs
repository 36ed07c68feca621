//! Account information and subscription quota.

mod client;
mod types;

pub use types::{Subscription, User};

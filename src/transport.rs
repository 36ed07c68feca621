//! HTTP transport shared by every endpoint group.

mod http;

pub(crate) use http::HttpTransport;
pub use http::API_KEY_HEADER;

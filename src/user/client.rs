use super::types::{Subscription, User};
use crate::{ElevenLabsClient, Result};
use reqwest::Method;

impl ElevenLabsClient {
    pub async fn get_user(&self) -> Result<User> {
        let url = self.transport.url(&["v1", "user"])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }

    pub async fn get_subscription(&self) -> Result<Subscription> {
        let url = self.transport.url(&["v1", "user", "subscription"])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }
}

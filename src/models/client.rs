use super::types::Model;
use crate::{ElevenLabsClient, Result};
use reqwest::Method;

impl ElevenLabsClient {
    pub async fn get_models(&self) -> Result<Vec<Model>> {
        let url = self.transport.url(&["v1", "models"])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }
}

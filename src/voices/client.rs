use super::types::{Voice, VoicesResponse};
use crate::client::core::require_id;
use crate::types::VoiceSettings;
use crate::{ElevenLabsClient, Result};
use reqwest::Method;
use tracing::debug;

impl ElevenLabsClient {
    pub async fn get_voices(&self) -> Result<Vec<Voice>> {
        let url = self.transport.url(&["v1", "voices"])?;
        let response: VoicesResponse = self
            .transport
            .send_json(self.transport.request(Method::GET, url))
            .await?;
        debug!(count = response.voices.len(), "voices listed");
        Ok(response.voices)
    }

    pub async fn get_voice(&self, voice_id: &str) -> Result<Voice> {
        let voice_id = require_id("voice_id", voice_id)?;
        let url = self.transport.url(&["v1", "voices", voice_id])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }

    pub async fn delete_voice(&self, voice_id: &str) -> Result<()> {
        let voice_id = require_id("voice_id", voice_id)?;
        let url = self.transport.url(&["v1", "voices", voice_id])?;
        self.transport
            .send_empty(self.transport.request(Method::DELETE, url))
            .await
    }

    /// Settings the service applies when a request carries none.
    pub async fn get_default_voice_settings(&self) -> Result<VoiceSettings> {
        let url = self.transport.url(&["v1", "voices", "settings", "default"])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }

    pub async fn get_voice_settings(&self, voice_id: &str) -> Result<VoiceSettings> {
        let voice_id = require_id("voice_id", voice_id)?;
        let url = self.transport.url(&["v1", "voices", voice_id, "settings"])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }

    pub async fn edit_voice_settings(&self, voice_id: &str, settings: &VoiceSettings) -> Result<()> {
        let voice_id = require_id("voice_id", voice_id)?;
        let url = self
            .transport
            .url(&["v1", "voices", voice_id, "settings", "edit"])?;
        self.transport
            .send_empty(self.transport.request(Method::POST, url).json(settings))
            .await
    }
}

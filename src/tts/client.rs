//! Text-to-speech calls on [`ElevenLabsClient`].

use super::types::TextToSpeechRequest;
use crate::client::core::require_id;
use crate::types::SynthesisOptions;
use crate::{ElevenLabsClient, Result};
use bytes::Bytes;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder};
use tokio::io::AsyncWrite;
use tracing::debug;

impl ElevenLabsClient {
    /// Synthesize `request` with the voice `voice_id` and return the whole audio payload.
    pub async fn text_to_speech(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
    ) -> Result<Bytes> {
        self.text_to_speech_with_options(voice_id, request, &SynthesisOptions::default())
            .await
    }

    pub async fn text_to_speech_with_options(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &SynthesisOptions,
    ) -> Result<Bytes> {
        let req = self.tts_request(voice_id, request, options, false)?;
        let audio = self.transport.send_bytes(req).await?;
        debug!(bytes = audio.len(), "text-to-speech finished");
        Ok(audio)
    }

    /// Synthesize `request` and copy the audio into `sink` as it arrives.
    ///
    /// Returns the number of bytes written. A non-success status fails before
    /// anything is written. If the stream breaks later, the sink keeps what it
    /// already received and the error reports how much that was.
    pub async fn text_to_speech_stream<W>(
        &self,
        sink: &mut W,
        voice_id: &str,
        request: &TextToSpeechRequest,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        self.text_to_speech_stream_with_options(sink, voice_id, request, &SynthesisOptions::default())
            .await
    }

    pub async fn text_to_speech_stream_with_options<W>(
        &self,
        sink: &mut W,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &SynthesisOptions,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let req = self.tts_request(voice_id, request, options, true)?;
        self.transport.stream_to(req, sink).await
    }

    fn tts_request(
        &self,
        voice_id: &str,
        request: &TextToSpeechRequest,
        options: &SynthesisOptions,
        stream: bool,
    ) -> Result<RequestBuilder> {
        let voice_id = require_id("voice_id", voice_id)?;
        request.validate()?;
        let query = options.query_pairs()?;

        let mut segments = vec!["v1", "text-to-speech", voice_id];
        if stream {
            segments.push("stream");
        }
        let url = self.transport.url(&segments)?;

        debug!(
            voice_id,
            model_id = %request.model_id,
            chars = request.text.chars().count(),
            stream,
            "text-to-speech request"
        );
        Ok(self
            .transport
            .request(Method::POST, url)
            .header(ACCEPT, options.accept())
            .query(&query)
            .json(request))
    }
}

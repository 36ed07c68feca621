//! Speech-to-speech calls on [`ElevenLabsClient`].

use super::types::{mime_for_file_name, SpeechToSpeechRequest};
use crate::client::core::require_id;
use crate::types::SynthesisOptions;
use crate::{ElevenLabsClient, Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::debug;

impl ElevenLabsClient {
    /// Convert the recorded speech in `request.audio` to the voice `voice_id`.
    ///
    /// The input is read to the end before the request is sent.
    pub async fn speech_to_speech<R>(
        &self,
        voice_id: &str,
        request: SpeechToSpeechRequest<'_, R>,
    ) -> Result<Bytes>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        self.speech_to_speech_with_options(voice_id, request, &SynthesisOptions::default())
            .await
    }

    pub async fn speech_to_speech_with_options<R>(
        &self,
        voice_id: &str,
        request: SpeechToSpeechRequest<'_, R>,
        options: &SynthesisOptions,
    ) -> Result<Bytes>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let req = self.sts_request(voice_id, request, options, false).await?;
        let audio = self.transport.send_bytes(req).await?;
        debug!(bytes = audio.len(), "speech-to-speech finished");
        Ok(audio)
    }

    /// Streaming variant of [`speech_to_speech`](Self::speech_to_speech); same
    /// sink contract as [`text_to_speech_stream`](Self::text_to_speech_stream).
    pub async fn speech_to_speech_stream<W, R>(
        &self,
        sink: &mut W,
        voice_id: &str,
        request: SpeechToSpeechRequest<'_, R>,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
        R: AsyncRead + Unpin + ?Sized,
    {
        let req = self
            .sts_request(voice_id, request, &SynthesisOptions::default(), true)
            .await?;
        self.transport.stream_to(req, sink).await
    }

    async fn sts_request<R>(
        &self,
        voice_id: &str,
        request: SpeechToSpeechRequest<'_, R>,
        options: &SynthesisOptions,
        stream: bool,
    ) -> Result<RequestBuilder>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let voice_id = require_id("voice_id", voice_id)?;
        let query = options.query_pairs()?;

        let SpeechToSpeechRequest {
            audio: source,
            file_name,
            model_id,
            voice_settings,
        } = request;

        let mut audio = Vec::new();
        source.read_to_end(&mut audio).await?;
        if audio.is_empty() {
            return Err(Error::validation_with_context(
                "input audio is empty",
                ErrorContext::new().with_field_path("audio").with_source("sts"),
            ));
        }

        let audio_len = audio.len();
        let mime = mime_for_file_name(&file_name);
        let part = Part::bytes(audio).file_name(file_name).mime_str(mime)?;
        let mut form = Form::new().part("audio", part);
        if !model_id.is_empty() {
            form = form.text("model_id", model_id.clone());
        }
        if let Some(settings) = &voice_settings {
            form = form.text("voice_settings", serde_json::to_string(settings)?);
        }

        let mut segments = vec!["v1", "speech-to-speech", voice_id];
        if stream {
            segments.push("stream");
        }
        let url = self.transport.url(&segments)?;

        debug!(
            voice_id,
            model_id = %model_id,
            input_bytes = audio_len,
            stream,
            "speech-to-speech request"
        );
        Ok(self
            .transport
            .request(Method::POST, url)
            .header(ACCEPT, options.accept())
            .query(&query)
            .multipart(form))
    }
}

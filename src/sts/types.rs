//! Speech-to-speech request types.

use crate::types::VoiceSettings;

pub(crate) const DEFAULT_FILE_NAME: &str = "audio.mp3";

/// Input for a speech-to-speech call.
///
/// The audio source is borrowed: the caller opens it, and closes it after
/// the call returns.
pub struct SpeechToSpeechRequest<'a, R: ?Sized> {
    pub audio: &'a mut R,
    /// File name reported in the multipart upload; its extension picks the MIME type.
    pub file_name: String,
    pub model_id: String,
    pub voice_settings: Option<VoiceSettings>,
}

impl<'a, R: ?Sized> SpeechToSpeechRequest<'a, R> {
    pub fn new(audio: &'a mut R, model_id: impl Into<String>) -> Self {
        Self {
            audio,
            file_name: DEFAULT_FILE_NAME.to_string(),
            model_id: model_id.into(),
            voice_settings: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }
}

/// MIME type guessed from the upload file name.
pub(crate) fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" | "mp4" => "audio/mp4",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}

//! Audio output selection for synthesis calls.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output formats accepted by the `output_format` query parameter.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "mp3_22050_32")]
    Mp3_22050_32,
    #[serde(rename = "mp3_44100_32")]
    Mp3_44100_32,
    #[serde(rename = "mp3_44100_64")]
    Mp3_44100_64,
    #[serde(rename = "mp3_44100_96")]
    Mp3_44100_96,
    #[serde(rename = "mp3_44100_128")]
    Mp3_44100_128,
    #[serde(rename = "mp3_44100_192")]
    Mp3_44100_192,
    #[serde(rename = "pcm_16000")]
    Pcm16000,
    #[serde(rename = "pcm_22050")]
    Pcm22050,
    #[serde(rename = "pcm_24000")]
    Pcm24000,
    #[serde(rename = "pcm_44100")]
    Pcm44100,
    #[serde(rename = "ulaw_8000")]
    Ulaw8000,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3_22050_32 => "mp3_22050_32",
            Self::Mp3_44100_32 => "mp3_44100_32",
            Self::Mp3_44100_64 => "mp3_44100_64",
            Self::Mp3_44100_96 => "mp3_44100_96",
            Self::Mp3_44100_128 => "mp3_44100_128",
            Self::Mp3_44100_192 => "mp3_44100_192",
            Self::Pcm16000 => "pcm_16000",
            Self::Pcm22050 => "pcm_22050",
            Self::Pcm24000 => "pcm_24000",
            Self::Pcm44100 => "pcm_44100",
            Self::Ulaw8000 => "ulaw_8000",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3_22050_32
            | Self::Mp3_44100_32
            | Self::Mp3_44100_64
            | Self::Mp3_44100_96
            | Self::Mp3_44100_128
            | Self::Mp3_44100_192 => "audio/mpeg",
            Self::Pcm16000 | Self::Pcm22050 | Self::Pcm24000 | Self::Pcm44100 => "audio/pcm",
            Self::Ulaw8000 => "audio/basic",
        }
    }

    /// Parse the wire name (e.g. `"pcm_24000"`). Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let format = match s.trim().to_lowercase().as_str() {
            "mp3_22050_32" => Self::Mp3_22050_32,
            "mp3_44100_32" => Self::Mp3_44100_32,
            "mp3_44100_64" => Self::Mp3_44100_64,
            "mp3_44100_96" => Self::Mp3_44100_96,
            "mp3_44100_128" => Self::Mp3_44100_128,
            "mp3_44100_192" => Self::Mp3_44100_192,
            "pcm_16000" => Self::Pcm16000,
            "pcm_22050" => Self::Pcm22050,
            "pcm_24000" => Self::Pcm24000,
            "pcm_44100" => Self::Pcm44100,
            "ulaw_8000" => Self::Ulaw8000,
            _ => return None,
        };
        Some(format)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest value accepted by `optimize_streaming_latency`.
pub const MAX_STREAMING_LATENCY_OPTIMIZATION: u8 = 4;

/// Query options for text-to-speech and speech-to-speech calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub output_format: Option<OutputFormat>,
    /// 0 (off) to 4 (max latency savings, text normalizer disabled).
    pub optimize_streaming_latency: Option<u8>,
}

impl SynthesisOptions {
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn optimize_streaming_latency(mut self, level: u8) -> Self {
        self.optimize_streaming_latency = Some(level);
        self
    }

    /// `Accept` header value matching the requested format.
    pub(crate) fn accept(&self) -> &'static str {
        self.output_format
            .map(|f| f.mime_type())
            .unwrap_or("audio/mpeg")
    }

    pub(crate) fn query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        let mut pairs = Vec::new();
        if let Some(level) = self.optimize_streaming_latency {
            if level > MAX_STREAMING_LATENCY_OPTIMIZATION {
                return Err(Error::validation_with_context(
                    format!(
                        "optimize_streaming_latency must be between 0 and {}",
                        MAX_STREAMING_LATENCY_OPTIMIZATION
                    ),
                    ErrorContext::new()
                        .with_field_path("optimize_streaming_latency")
                        .with_details(level.to_string()),
                ));
            }
            pairs.push(("optimize_streaming_latency", level.to_string()));
        }
        if let Some(format) = self.output_format {
            pairs.push(("output_format", format.as_str().to_string()));
        }
        Ok(pairs)
    }
}

//! Streamed text-to-speech played through mpv
//!
//! Audio is piped into mpv's standard input as it arrives, so playback starts
//! before synthesis finishes. Requires `mpv` on the PATH.
//!
//! Usage:
//!   ELEVENLABS_API_KEY=your_key ELEVENLABS_TIMEOUT_SECS=60 cargo run --example text_to_speech_stream

use elevenlabs_lib_rust::{ElevenLabsClient, TextToSpeechRequest};
use std::process::Stdio;
use tokio::process::Command;
use tracing_subscriber::EnvFilter;

const ADAM: &str = "pNInz6obpgDQGcFmaJgB";

const MESSAGE: &str = "The concept of flushing typically applies to I/O buffers in many \
programming languages, which store data temporarily in memory before writing it to a more \
permanent location like a file or a network connection. Flushing the buffer means writing all \
the buffered data immediately, even if the buffer isn't full.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Long texts need a generous timeout; the stream must finish within it.
    let client = ElevenLabsClient::builder().timeout_secs(60).build()?;

    let mut player = Command::new("mpv")
        .args(["--no-cache", "--no-terminal", "--", "fd://0"])
        .stdin(Stdio::piped())
        .spawn()?;
    let mut stdin = player
        .stdin
        .take()
        .ok_or("mpv started without a stdin pipe")?;

    let written = client
        .text_to_speech_stream(
            &mut stdin,
            ADAM,
            &TextToSpeechRequest::new(MESSAGE, "eleven_multilingual_v1"),
        )
        .await?;
    println!("streaming finished ({} bytes)", written);

    // Closing the pipe lets mpv exit once playback ends.
    drop(stdin);
    let status = player.wait().await?;
    if !status.success() {
        return Err(format!("mpv exited with {}", status).into());
    }
    println!("all done");
    Ok(())
}

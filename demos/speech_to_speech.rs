//! Speech-to-speech
//!
//! Re-voices `adam.mp3` (written by the `text_to_speech` demo) with the
//! "Rachel" voice and saves the result to `rachel.mp3`.
//!
//! Usage:
//!   ELEVENLABS_API_KEY=your_key cargo run --example speech_to_speech

use elevenlabs_lib_rust::{ElevenLabsClient, SpeechToSpeechRequest};
use tracing_subscriber::EnvFilter;

const RACHEL: &str = "21m00Tcm4TlvDq8ikWAM";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ElevenLabsClient::from_env()?;

    let mut input = tokio::fs::File::open("adam.mp3").await?;
    let request =
        SpeechToSpeechRequest::new(&mut input, "eleven_english_sts_v2").with_file_name("adam.mp3");
    let audio = client.speech_to_speech(RACHEL, request).await?;

    tokio::fs::write("rachel.mp3", &audio).await?;
    println!("wrote rachel.mp3 ({} bytes)", audio.len());
    Ok(())
}

//! Buffered text-to-speech
//!
//! Synthesizes one sentence with the "Adam" voice and writes it to `adam.mp3`.
//!
//! Usage:
//!   ELEVENLABS_API_KEY=your_key cargo run --example text_to_speech

use elevenlabs_lib_rust::{ElevenLabsClient, TextToSpeechRequest};
use tracing_subscriber::EnvFilter;

const ADAM: &str = "pNInz6obpgDQGcFmaJgB";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ElevenLabsClient::from_env()?;

    let request = TextToSpeechRequest::new(
        "Hello, world! My name is Adam, nice to meet you!",
        "eleven_monolingual_v1",
    );
    let audio = client.text_to_speech(ADAM, &request).await?;

    tokio::fs::write("adam.mp3", &audio).await?;
    println!("wrote adam.mp3 ({} bytes)", audio.len());
    Ok(())
}

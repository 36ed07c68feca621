//! Buffered text-to-speech calls

use crate::mock_server::{fake_audio, MockServerFixture, VOICE_ID};
use elevenlabs_lib_rust::{OutputFormat, SynthesisOptions, TextToSpeechRequest, VoiceSettings};
use mockito::Matcher;

#[tokio::test]
async fn test_text_to_speech_returns_audio() {
    let fixture = MockServerFixture::new().await;
    let audio = fake_audio(4096);
    let mock = fixture
        .mock_audio("POST", &format!("/v1/text-to-speech/{}", VOICE_ID), &audio)
        .await;

    let client = fixture.client();
    let request = TextToSpeechRequest::new(
        "Hello, world! My name is Adam, nice to meet you!",
        "eleven_monolingual_v1",
    );
    let bytes = client.text_to_speech(VOICE_ID, &request).await.unwrap();

    assert!(!bytes.is_empty());
    assert_eq!(bytes.as_ref(), audio.as_slice());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_text_to_speech_sends_json_body() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", format!("/v1/text-to-speech/{}", VOICE_ID).as_str())
            .match_header("xi-api-key", "test-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "text": "Hi there",
                "model_id": "eleven_multilingual_v2",
                "voice_settings": {
                    "stability": 0.25,
                    "similarity_boost": 0.5,
                    "style": 0.0
                }
            })))
            .with_status(200)
            .with_body("ID3")
            .create_async()
            .await
    };

    let request = TextToSpeechRequest::new("Hi there", "eleven_multilingual_v2")
        .with_voice_settings(VoiceSettings::new(0.25, 0.5).with_style(0.0));
    let bytes = fixture
        .client()
        .text_to_speech(VOICE_ID, &request)
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), b"ID3");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_text_to_speech_options_become_query() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", format!("/v1/text-to-speech/{}", VOICE_ID).as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("output_format".into(), "pcm_16000".into()),
                Matcher::UrlEncoded("optimize_streaming_latency".into(), "2".into()),
            ]))
            .match_header("accept", "audio/pcm")
            .with_status(200)
            .with_body([0u8, 1, 2, 3])
            .create_async()
            .await
    };

    let options = SynthesisOptions::default()
        .output_format(OutputFormat::Pcm16000)
        .optimize_streaming_latency(2);
    let bytes = fixture
        .client()
        .text_to_speech_with_options(
            VOICE_ID,
            &TextToSpeechRequest::new("pcm please", "eleven_turbo_v2"),
            &options,
        )
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), &[0u8, 1, 2, 3]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_audio_survives_disk_round_trip() {
    let fixture = MockServerFixture::new().await;
    let audio = fake_audio(10_000);
    let _mock = fixture
        .mock_audio("POST", &format!("/v1/text-to-speech/{}", VOICE_ID), &audio)
        .await;

    let bytes = fixture
        .client()
        .text_to_speech(VOICE_ID, &TextToSpeechRequest::new("save me", "eleven_monolingual_v1"))
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adam.mp3");
    tokio::fs::write(&path, &bytes).await.unwrap();
    let reread = tokio::fs::read(&path).await.unwrap();

    assert_eq!(reread, bytes.to_vec());
    assert_eq!(reread, audio);
}

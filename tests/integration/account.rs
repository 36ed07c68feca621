//! Voices, models and account endpoints

use crate::mock_server::{MockServerFixture, API_KEY, VOICE_ID};
use elevenlabs_lib_rust::VoiceSettings;
use mockito::Matcher;

const VOICES: &str = r#"{
  "voices": [
    {
      "voice_id": "21m00Tcm4TlvDq8ikWAM",
      "name": "Rachel",
      "category": "premade",
      "labels": {"accent": "american"},
      "samples": null,
      "settings": null
    },
    {
      "voice_id": "pNInz6obpgDQGcFmaJgB",
      "name": "Adam",
      "category": "premade",
      "preview_url": "https://example.com/adam.mp3"
    }
  ]
}"#;

#[tokio::test]
async fn test_list_and_get_voices() {
    let fixture = MockServerFixture::new().await;
    let list = fixture.mock_json("GET", "/v1/voices", VOICES).await;
    let one = fixture
        .mock_json(
            "GET",
            &format!("/v1/voices/{}", VOICE_ID),
            r#"{"voice_id":"pNInz6obpgDQGcFmaJgB","name":"Adam",
                "settings":{"stability":0.5,"similarity_boost":0.75}}"#,
        )
        .await;
    let client = fixture.client();

    let voices = client.get_voices().await.unwrap();
    assert_eq!(voices.len(), 2);
    let adam = voices
        .iter()
        .find(|v| v.name.as_deref() == Some("Adam"))
        .unwrap();
    assert_eq!(adam.voice_id, VOICE_ID);

    let voice = client.get_voice(VOICE_ID).await.unwrap();
    assert_eq!(voice.settings, Some(VoiceSettings::default()));

    list.assert_async().await;
    one.assert_async().await;
}

#[tokio::test]
async fn test_voice_settings_endpoints() {
    let fixture = MockServerFixture::new().await;
    let defaults = fixture
        .mock_json(
            "GET",
            "/v1/voices/settings/default",
            r#"{"stability":0.5,"similarity_boost":0.75,"style":0.0,"use_speaker_boost":true}"#,
        )
        .await;
    let current = fixture
        .mock_json(
            "GET",
            &format!("/v1/voices/{}/settings", VOICE_ID),
            r#"{"stability":0.2,"similarity_boost":0.9}"#,
        )
        .await;
    let edit = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", format!("/v1/voices/{}/settings/edit", VOICE_ID).as_str())
            .match_header("xi-api-key", API_KEY)
            .match_body(Matcher::PartialJson(serde_json::json!({
                "stability": 0.25,
                "similarity_boost": 0.5
            })))
            .with_status(200)
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await
    };
    let client = fixture.client();

    let default_settings = client.get_default_voice_settings().await.unwrap();
    assert_eq!(default_settings.use_speaker_boost, Some(true));

    let settings = client.get_voice_settings(VOICE_ID).await.unwrap();
    assert_eq!(settings.stability, 0.2);
    assert!(settings.style.is_none());

    client
        .edit_voice_settings(VOICE_ID, &VoiceSettings::new(0.25, 0.5))
        .await
        .unwrap();

    defaults.assert_async().await;
    current.assert_async().await;
    edit.assert_async().await;
}

#[tokio::test]
async fn test_delete_voice() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("DELETE", "/v1/voices/cloned-1", r#"{"status":"ok"}"#)
        .await;

    fixture.client().delete_voice("cloned-1").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_models() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/v1/models",
            r#"[{"model_id":"eleven_monolingual_v1","can_do_text_to_speech":true,
                 "languages":[{"language_id":"en","name":"English"}]},
                {"model_id":"eleven_english_sts_v2","can_do_voice_conversion":true}]"#,
        )
        .await;

    let models = fixture.client().get_models().await.unwrap();
    let sts: Vec<_> = models
        .iter()
        .filter(|m| m.can_do_voice_conversion)
        .map(|m| m.model_id.as_str())
        .collect();
    assert_eq!(sts, vec!["eleven_english_sts_v2"]);
    assert!(models[0].supports_language("en"));
}

#[tokio::test]
async fn test_user_and_subscription() {
    let fixture = MockServerFixture::new().await;
    let subscription = r#"{"tier":"free","character_count":1500,"character_limit":10000,
                           "status":"free"}"#;
    let _user = fixture
        .mock_json(
            "GET",
            "/v1/user",
            &format!(r#"{{"subscription":{},"is_new_user":true}}"#, subscription),
        )
        .await;
    let _sub = fixture
        .mock_json("GET", "/v1/user/subscription", subscription)
        .await;
    let client = fixture.client();

    let user = client.get_user().await.unwrap();
    assert!(user.is_new_user);
    assert_eq!(user.subscription.tier, "free");

    let sub = client.get_subscription().await.unwrap();
    assert_eq!(sub.remaining_characters(), 8500);
    assert_eq!(sub, user.subscription);
}

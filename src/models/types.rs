use serde::{Deserialize, Serialize};

/// A synthesis model such as `eleven_multilingual_v2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub model_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub can_do_text_to_speech: bool,
    #[serde(default)]
    pub can_do_voice_conversion: bool,
    #[serde(default)]
    pub can_be_finetuned: bool,
    #[serde(default)]
    pub token_cost_factor: Option<f64>,
    #[serde(default)]
    pub languages: Vec<ModelLanguage>,
}

impl Model {
    pub fn supports_language(&self, language_id: &str) -> bool {
        self.languages
            .iter()
            .any(|l| l.language_id.eq_ignore_ascii_case(language_id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLanguage {
    pub language_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

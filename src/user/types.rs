use serde::{Deserialize, Serialize};

/// Account owning the API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub subscription: Subscription,
    #[serde(default)]
    pub is_new_user: bool,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub can_use_delayed_payment_methods: bool,
}

/// Subscription tier and character quota.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub tier: String,
    pub character_count: i64,
    pub character_limit: i64,
    pub can_extend_character_limit: bool,
    pub allowed_to_extend_character_limit: bool,
    /// Seconds since the Unix epoch.
    pub next_character_count_reset_unix: Option<i64>,
    pub voice_limit: i64,
    pub professional_voice_limit: i64,
    pub can_extend_voice_limit: bool,
    pub can_use_instant_voice_cloning: bool,
    pub can_use_professional_voice_cloning: bool,
    pub currency: Option<String>,
    pub status: Option<String>,
}

impl Subscription {
    /// Characters left before the quota resets; never negative.
    pub fn remaining_characters(&self) -> i64 {
        (self.character_limit - self.character_count).max(0)
    }
}

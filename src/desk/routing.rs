// src/desk/routing.rs — Ward assignment from the patient's first message

use serde::{Deserialize, Serialize};

const EMERGENCY_KEYWORDS: &[&str] = &[
    "pain",
    "bleeding",
    "unconscious",
    "accident",
    "severe",
    "stroke",
    "heart attack",
    "broken",
    "trauma",
    "heart",
    "chest",
    "collapse",
];

const MENTAL_HEALTH_KEYWORDS: &[&str] = &[
    "anxiety",
    "depression",
    "panic",
    "suicide",
    "self-harm",
    "sad",
    "hopeless",
    "stress",
    "mental",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ward {
    General,
    Emergency,
    MentalHealth,
}

impl Ward {
    /// Case-insensitive keyword match. Emergency wins over mental health;
    /// anything unmatched goes to the general ward.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if EMERGENCY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Ward::Emergency
        } else if MENTAL_HEALTH_KEYWORDS.iter().any(|k| lower.contains(k)) {
            Ward::MentalHealth
        } else {
            Ward::General
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Ward::General => "General Ward",
            Ward::Emergency => "Emergency Ward",
            Ward::MentalHealth => "Mental Health Ward",
        }
    }
}

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Quiz answers as posted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, rename = "questionsText")]
    pub questions_text: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswer {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub value: Value,
}

impl QuizAnswer {
    /// Question ids arrive as strings or numbers; the lookup table is keyed by string.
    pub fn lookup_key(&self) -> Option<String> {
        match &self.id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl QuizSubmission {
    pub fn question_for(&self, answer: &QuizAnswer) -> Option<&str> {
        answer
            .lookup_key()
            .and_then(|key| self.questions_text.get(&key))
            .map(String::as_str)
    }

    pub fn gender_or_default(&self) -> &str {
        self.gender
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or("Not specified")
    }
}

/// Photo upload shared by the spirit-animal and color-mood endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSubmission {
    #[serde(default)]
    pub image: Option<String>,
}

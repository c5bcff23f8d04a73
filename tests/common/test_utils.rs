use super::mocks::{MockLlmClient, MockPhotoLookup};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use persona_lens::{
    pipeline::Analyzer,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// PNG signature plus an empty IHDR length; enough for format sniffing
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

pub fn png_base64() -> String {
    STANDARD.encode(PNG_BYTES)
}

pub fn create_analyzer(llm: &MockLlmClient, photos: &MockPhotoLookup) -> Analyzer {
    Analyzer::new(Arc::new(llm.clone()), Arc::new(photos.clone()))
}

/// Full router wired to the given doubles
pub fn create_test_app(llm: &MockLlmClient, photos: &MockPhotoLookup) -> Router {
    server::router(AppState {
        analyzer: Arc::new(create_analyzer(llm, photos)),
    })
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn quiz_request() -> Value {
    json!({
        "answers": [
            {"id": "q1", "value": 2},
            {"id": "q2", "value": -1},
            {"id": "q3", "value": 3}
        ],
        "gender": "male",
        "questionsText": {
            "q1": "You regularly make new friends.",
            "q2": "You prefer to plan your vacations.",
            "q3": "You enjoy abstract discussions."
        }
    })
}

pub fn mbti_fixture() -> Value {
    json!({
        "mbti_type": "ENFP",
        "type_name": "The Campaigner",
        "core_characteristics": "Enthusiastic, creative and sociable free spirits.",
        "strengths": ["Curious", "Perceptive", "Energetic"],
        "challenges": ["Unfocused", "Overthinking", "Easily stressed"],
        "career_paths": ["Journalist", "Actor", "Entrepreneur"],
        "famous_people": [
            {"name": "Robin Williams", "description": "Comedian and actor"},
            {"name": "Quentin Tarantino", "description": "Film director"},
            {"name": "Spider-Man", "description": "Marvel superhero"}
        ],
        "summary": "Your enthusiasm lights up every room."
    })
}

pub fn animal_fixture() -> Value {
    json!({
        "animal": "Лиса",
        "animal_en": "fox",
        "reason": "Хитрый прищур и рыжий свитер выдают в тебе лису."
    })
}

pub fn color_fixture() -> Value {
    json!({
        "mood_name": "Осенний уют",
        "description": "Эта палитра напоминает о теплом пледе и чашке какао.",
        "palette": ["#8B4513", "#D2691E", "#F4A460", "#FFF8DC"]
    })
}

/// Wraps a JSON value the way models tend to despite instructions
pub fn fenced(value: &Value) -> String {
    format!("```json\n{}\n```", serde_json::to_string_pretty(value).unwrap())
}

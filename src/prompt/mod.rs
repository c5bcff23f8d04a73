//! Instructions sent to the model. Each prompt spells out the exact JSON shape
//! the matching schema in [`crate::analysis`] expects back.

use crate::analysis::QuizSubmission;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct AnsweredQuestion<'a> {
    question: Option<&'a str>,
    answer_value: &'a Value,
}

/// Renders the MBTI analysis instruction. Answers whose id has no question text
/// are kept with `"question": null`.
pub fn mbti_prompt(submission: &QuizSubmission) -> String {
    let context: Vec<AnsweredQuestion<'_>> = submission
        .answers
        .iter()
        .map(|answer| AnsweredQuestion {
            question: submission.question_for(answer),
            answer_value: &answer.value,
        })
        .collect();

    // Serializing borrowed strings and JSON values cannot fail
    let answers_json = serde_json::to_string_pretty(&context).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"**ROLE & OBJECTIVE:** You are an expert MBTI analyst. Your task is to analyze the user's test answers and return a JSON object.
**IMPORTANT:** You MUST respond ONLY with a valid JSON object. Do not include "```json", "```", or any other text outside of the JSON structure.

**USER DATA:**
- Gender: {gender}
- Answers: {answers_json}

**JSON OUTPUT STRUCTURE:**
{{
"mbti_type": "string", // The 4-letter MBTI type (e.g., "INFP")
"type_name": "string", // The descriptive name (e.g., "The Mediator")
"core_characteristics": "string", // A single, concise paragraph (max 3 sentences).
"strengths": ["string", "string", "string"], // Exactly 3 key strengths.
"challenges": ["string", "string", "string"], // Exactly 3 potential challenges.
"career_paths": ["string", "string", "string"], // Exactly 3 suitable career examples.
"famous_people": [  // Exactly 3 well-known people who share the same MBTI type.
    {{
    "name": "string", // Full name of the person or fictional character.
    "description": "string" // Short phrase describing why they are known (e.g., "Theoretical physicist", "Pop singer", "Fictional detective from BBC's Sherlock")
    }}
],
"summary": "string" // A final, encouraging summary sentence.
}}

**NOTES FOR famous_people FIELD:**
- Include a mix of real people and fictional characters if appropriate.
- Prefer globally recognized names (e.g., Albert Einstein, Steve Jobs, Sherlock Holmes, etc.).
- Make the descriptions clear and short, max 10 words.

Analyze the data and generate the JSON object now.
"#,
        gender = submission.gender_or_default(),
    )
}

pub fn spirit_animal_prompt() -> &'static str {
    r#"**РОЛЬ И ЗАДАЧА:**
Твоя роль — остроумный, современный оракул. Твоя задача — проанализировать человека на фото и вернуть валидный JSON-объект.

**ПРАВИЛА:**
1.  Отвечай ТОЛЬКО валидным JSON-объектом. Никакого лишнего текста.
2.  Поля `animal` и `reason` должны быть на русском языке.
3.  Поле `animal_en` должно содержать точный перевод `animal` на английский для поиска в API.

**СТРУКТУРА JSON-ОТВЕТА:**
{
  "animal": "string (на русском)",
  "animal_en": "string (на английском)",
  "reason": "string (на русском)"
}

Проанализируй изображение и сгенерируй JSON.
"#
}

pub fn color_mood_prompt() -> &'static str {
    r##"**РОЛЬ И ЗАДАЧА:**
Твоя роль — колорист и арт-критик с поэтическим взглядом. Твоя задача — проанализировать цветовую палитру и атмосферу изображения и вернуть валидный JSON-объект.

**ПРАВИЛА:**
1.  Отвечай ТОЛЬКО валидным JSON-объектом. Никакого лишнего текста.
2.  Все текстовые поля (`mood_name`, `description`) должны быть на русском языке.
3.  `mood_name`: Придумай короткое, образное и красивое название для цветового настроения фото (например, "Неоновый закат", "Утренняя дымка в лесу", "Осенний уют").
4.  `description`: Напиши поэтичное и вдохновляющее описание (2-3 предложения), перечисляя, с чем ассоциируются эти цвета. (например, "Эта палитра напоминает о теплом пледе, чашке какао и мурлыканье кота...")
5.  `palette`: Извлеки ровно 4 доминирующих цвета из изображения и верни их в виде массива HEX-кодов.

**СТРУКТУРА JSON-ОТВЕТА:**
{
  "mood_name": "string",
  "description": "string",
  "palette": ["#XXXXXX", "#XXXXXX", "#XXXXXX", "#XXXXXX"]
}

Проанализируй изображение и сгенерируй JSON.
"##
}

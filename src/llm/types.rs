use crate::{Error, Result};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
    ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
    ImageUrl,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// A single-turn request to the model: one instruction, optionally with one image.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub image: Option<ImageInput>,
}

impl CompletionRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
        }
    }

    pub fn with_image(prompt: impl Into<String>, image: ImageInput) -> Self {
        Self {
            prompt: prompt.into(),
            image: Some(image),
        }
    }

    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage> {
        let content = match &self.image {
            None => ChatCompletionRequestUserMessageContent::Text(self.prompt.clone()),
            Some(image) => ChatCompletionRequestUserMessageContent::Array(vec![
                ChatCompletionRequestUserMessageContentPart::Text(
                    ChatCompletionRequestMessageContentPartText {
                        text: self.prompt.clone(),
                    },
                ),
                ChatCompletionRequestUserMessageContentPart::ImageUrl(
                    ChatCompletionRequestMessageContentPartImage {
                        image_url: ImageUrl {
                            url: image.data_url(),
                            detail: None,
                        },
                    },
                ),
            ]),
        };

        let msg = ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?;
        Ok(msg.into())
    }
}

/// Decoded image bytes with the MIME type sniffed from their magic number.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInput {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    /// Decodes a base64 payload, accepting an optional `data:<mime>;base64,` prefix.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let payload = match encoded.split_once(";base64,") {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => encoded,
        };

        // Clients commonly wrap long base64 strings
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| Error::image_decode(format!("Invalid base64 image data: {}", e)))?;

        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let kind = infer::get(&bytes)
            .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
            .ok_or_else(|| Error::image_decode("Cannot identify image file"))?;

        Ok(Self {
            mime_type: kind.mime_type().to_string(),
            bytes,
        })
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

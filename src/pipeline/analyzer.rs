use super::lifecycle::{RequestEvent, RequestLifecycle};
use crate::{
    Error, Result,
    analysis::{
        ColorMood, ImageSubmission, MbtiAnalysis, MbtiProfile, QuizSubmission, SpiritAnimal,
        SpiritAnimalAnalysis, Validate, normalize,
    },
    config::Config,
    enrichment::{PhotoLookup, UnsplashClient},
    llm::{CompletionRequest, ImageInput, LlmClient, OpenAiClient},
    prompt,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one analysis per call: validate input, ask the model once, normalize
/// the reply and, for spirit animals, attach a photo. Holds no per-request state.
pub struct Analyzer {
    llm_client: Arc<dyn LlmClient>,
    photo_lookup: Arc<dyn PhotoLookup>,
}

impl Analyzer {
    pub fn new(llm_client: Arc<dyn LlmClient>, photo_lookup: Arc<dyn PhotoLookup>) -> Self {
        Self {
            llm_client,
            photo_lookup,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let llm_client = Arc::new(OpenAiClient::new(config.llm.clone()));
        let photo_lookup = UnsplashClient::new(config.photos.clone())?;

        info!(
            "Analyzer initialized with model {} (photo search {})",
            llm_client.model(),
            if photo_lookup.is_configured() {
                "enabled"
            } else {
                "disabled"
            }
        );

        Ok(Self::new(llm_client, Arc::new(photo_lookup)))
    }

    pub async fn analyze_personality(&self, submission: QuizSubmission) -> Result<MbtiAnalysis> {
        let mut lifecycle = RequestLifecycle::new("/mbti");

        if submission.answers.is_empty() || submission.questions_text.is_empty() {
            return Err(lifecycle.fail(Error::invalid_input("Missing answers or questions text")));
        }
        lifecycle.transition(RequestEvent::InputAccepted)?;

        debug!(
            "Request {}: building MBTI prompt from {} answers",
            lifecycle.request_id(),
            submission.answers.len()
        );
        let request = CompletionRequest::text(prompt::mbti_prompt(&submission));

        let profile: MbtiProfile = self.ask_model(&mut lifecycle, request).await?;
        let analysis = MbtiAnalysis::from(profile);

        lifecycle.transition(RequestEvent::ResponseReady)?;
        info!(
            "Request {} on {}: personality analyzed as '{}'",
            lifecycle.request_id(),
            lifecycle.endpoint(),
            analysis.profile.mbti_type
        );

        Ok(analysis)
    }

    pub async fn find_spirit_animal(
        &self,
        submission: ImageSubmission,
    ) -> Result<SpiritAnimalAnalysis> {
        let mut lifecycle = RequestLifecycle::new("/animal");

        let image = Self::accept_image(&mut lifecycle, submission)?;
        let request = CompletionRequest::with_image(prompt::spirit_animal_prompt(), image);

        let animal: SpiritAnimal = self.ask_model(&mut lifecycle, request).await?;

        let image_url = match animal.search_keyword() {
            Some(keyword) => {
                let url = self.lookup_photo(&lifecycle, keyword).await;
                lifecycle.transition(RequestEvent::EnrichmentFinished)?;
                url
            }
            None => None,
        };

        lifecycle.transition(RequestEvent::ResponseReady)?;
        info!(
            "Request {} on {}: spirit animal '{}' (photo attached: {})",
            lifecycle.request_id(),
            lifecycle.endpoint(),
            animal.animal,
            image_url.is_some()
        );

        Ok(SpiritAnimalAnalysis { animal, image_url })
    }

    pub async fn analyze_colors(&self, submission: ImageSubmission) -> Result<ColorMood> {
        let mut lifecycle = RequestLifecycle::new("/color");

        let image = Self::accept_image(&mut lifecycle, submission)?;
        let request = CompletionRequest::with_image(prompt::color_mood_prompt(), image);

        let mood: ColorMood = self.ask_model(&mut lifecycle, request).await?;

        lifecycle.transition(RequestEvent::ResponseReady)?;
        info!(
            "Request {} on {}: color mood '{}'",
            lifecycle.request_id(),
            lifecycle.endpoint(),
            mood.mood_name
        );

        Ok(mood)
    }

    /// Presence is a client error; undecodable bytes are a server error.
    fn accept_image(
        lifecycle: &mut RequestLifecycle,
        submission: ImageSubmission,
    ) -> Result<ImageInput> {
        let encoded = match submission.image {
            Some(encoded) if !encoded.trim().is_empty() => encoded,
            _ => return Err(lifecycle.fail(Error::invalid_input("No image data provided"))),
        };
        lifecycle.transition(RequestEvent::InputAccepted)?;

        let image = ImageInput::from_base64(&encoded).map_err(|e| lifecycle.fail(e))?;
        debug!(
            "Request {}: decoded {} image ({} bytes)",
            lifecycle.request_id(),
            image.mime_type,
            image.bytes.len()
        );

        Ok(image)
    }

    async fn ask_model<T>(
        &self,
        lifecycle: &mut RequestLifecycle,
        request: CompletionRequest,
    ) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        let reply = self
            .llm_client
            .complete(request)
            .await
            .map_err(|e| lifecycle.fail(e))?;
        lifecycle.transition(RequestEvent::ModelReplied)?;

        debug!(
            "Request {} on {}: model replied with {} chars",
            lifecycle.request_id(),
            lifecycle.endpoint(),
            reply.len()
        );

        let record = normalize::<T>(&reply).map_err(|e| lifecycle.fail(e))?;
        lifecycle.transition(RequestEvent::ReplyNormalized)?;

        Ok(record)
    }

    async fn lookup_photo(&self, lifecycle: &RequestLifecycle, keyword: &str) -> Option<String> {
        match self.photo_lookup.find_photo(keyword).await {
            Ok(url) => url,
            Err(e) => {
                warn!(
                    "Request {}: photo lookup for '{}' failed, continuing without image: {}",
                    lifecycle.request_id(),
                    keyword,
                    e
                );
                None
            }
        }
    }
}

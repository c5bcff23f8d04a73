use async_trait::async_trait;
use persona_lens::{
    Error, Result,
    enrichment::PhotoLookup,
    llm::{CompletionRequest, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that replays canned replies and records every request
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push(reply.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::llm("No more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock photo search returning a fixed URL, nothing, or a network-style failure
#[derive(Debug, Clone)]
pub struct MockPhotoLookup {
    pub url: Option<String>,
    pub error: Option<String>,
    pub keywords: Arc<Mutex<Vec<String>>>,
}

impl MockPhotoLookup {
    pub fn new() -> Self {
        Self {
            url: None,
            error: None,
            keywords: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_keywords(&self) -> Vec<String> {
        self.keywords.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoLookup for MockPhotoLookup {
    async fn find_photo(&self, keyword: &str) -> Result<Option<String>> {
        self.keywords.lock().unwrap().push(keyword.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        Ok(self.url.clone())
    }
}

impl Default for MockPhotoLookup {
    fn default() -> Self {
        Self::new()
    }
}

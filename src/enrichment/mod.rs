mod unsplash;

pub use unsplash::UnsplashClient;

use crate::Result;
use async_trait::async_trait;

/// Stock-photo search. Failures here are cosmetic; callers degrade them to "no photo".
#[async_trait]
pub trait PhotoLookup: Send + Sync {
    async fn find_photo(&self, keyword: &str) -> Result<Option<String>>;
}

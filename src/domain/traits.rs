use crate::domain::model::{TranslationRequest, TranslationResult};
use async_trait::async_trait;

/// Trait for translation services
///
/// Implementations never fail: errors come back inline in the result.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> TranslationResult;
}

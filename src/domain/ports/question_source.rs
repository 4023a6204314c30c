use async_trait::async_trait;

use crate::domain::errors::BridgeResult;
use crate::domain::models::{Category, Level};

/// Port for question text generation.
///
/// The default adapter is a fixed table; a generative model can be plugged
/// in instead as long as it returns question text for every valid cell. The
/// provider bounds each call with a timeout and falls back to a default
/// question on error or expiry.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Name of the source, for logs
    fn name(&self) -> &'static str;

    /// Question text for one (category, level) cell
    async fn question_text(&self, category: Category, level: Level) -> BridgeResult<String>;
}

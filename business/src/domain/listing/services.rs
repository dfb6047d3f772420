use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The slice of a draft that matters when judging whether its expiry date
/// is plausible for that kind of product.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryCandidate {
    pub title: String,
    pub brand: String,
    pub expiry_date: DateTime<Utc>,
    pub manufacturer_date: Option<DateTime<Utc>>,
    pub best_before: Option<DateTime<Utc>>,
    pub storage_info: Option<String>,
}

/// Judges a batch of candidates in one round trip and answers, per candidate
/// and in the same order, whether the declared expiry date is believable.
///
/// Implementations must degrade gracefully: when the judgement cannot be
/// obtained, every candidate passes rather than blocking the submission.
#[async_trait]
pub trait ExpiryVerifierService: Send + Sync {
    async fn verify_batch(&self, candidates: &[ExpiryCandidate]) -> Vec<bool>;
}

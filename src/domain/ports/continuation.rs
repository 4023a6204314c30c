use crate::domain::models::HistoryEntry;

/// Port deciding whether an interview proceeds to another question.
///
/// `decide` sees the caller's history as it stood before the current
/// response; returning `false` ends the session.
pub trait ContinuationPolicy: Send + Sync {
    /// Name of the policy, for logs
    fn name(&self) -> &'static str;

    /// `true` to ask another question, `false` to summarise
    fn decide(&self, history: &[HistoryEntry]) -> bool;
}

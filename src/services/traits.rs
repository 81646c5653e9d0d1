//! Trait seams for the form's collaborators, mockable in tests

use super::consumer::Submission;
use anyhow::Result;

/// Supplies the list of downtime causes the form offers
#[cfg_attr(test, mockall::automock)]
pub trait DowntimeCauseProvider {
    /// Fetch the current downtime causes
    fn downtime_causes(&self) -> Result<Vec<String>>;
}

/// Receives each successfully submitted record
#[cfg_attr(test, mockall::automock)]
pub trait RecordConsumer {
    /// Take ownership of a finalized submission. Called once per submit.
    fn accept(&mut self, submission: &Submission) -> Result<()>;
}

//! Submitted records and the consumer that reports them

use super::traits::RecordConsumer;
use crate::state::Record;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A validated record handed out by a successful submit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub record: Record,
}

impl Submission {
    pub fn new(record: Record) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

/// Writes each submission to the log as JSON
#[derive(Debug, Default)]
pub struct LogConsumer {
    accepted: usize,
}

impl LogConsumer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordConsumer for LogConsumer {
    fn accept(&mut self, submission: &Submission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        self.accepted += 1;
        tracing::info!(
            id = %submission.id,
            count = self.accepted,
            "Form submitted: {payload}"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Numeric, Operation};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submission_serializes_record() {
        let record = Record {
            operation: Some(Operation::Assembly),
            production: Numeric::Number(40.0),
            ..Record::default()
        };
        let submission = Submission::new(record);
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["record"]["operation"], "Assembly");
        assert_eq!(value["record"]["production"], 40.0);
        assert!(value["submittedAt"].is_string());
    }

    #[test]
    fn test_submissions_get_distinct_ids() {
        let a = Submission::new(Record::default());
        let b = Submission::new(Record::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_log_consumer_counts() {
        let mut consumer = LogConsumer::new();
        consumer.accept(&Submission::new(Record::default())).unwrap();
        consumer.accept(&Submission::new(Record::default())).unwrap();
        assert_eq!(consumer.accepted, 2);
    }
}

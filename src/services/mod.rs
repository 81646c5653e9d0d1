//! Collaborators the form hands data to or takes data from

mod causes;
mod consumer;
mod traits;

pub use causes::ConfiguredCauses;
pub use consumer::{LogConsumer, Submission};
pub use traits::{DowntimeCauseProvider, RecordConsumer};

#[cfg(test)]
pub use traits::{MockDowntimeCauseProvider, MockRecordConsumer};

//! Empty log shells, tagged with what the XML serializers expect.

use crate::model::{Classifier, EventLog, Extension};

/// Prefix of every generated log's display name.
pub const LOG_NAME_PREFIX: &str = "Synthetic log for process: ";

/// Lifecycle model of generated events.
pub const STANDARD_LIFECYCLE_MODEL: &str = "standard";

/// Create an empty log named after `process_name`.
///
/// The log declares the concept, lifecycle and time extensions and the
/// event-name classifier. Traces are appended by the generator.
pub fn assemble(process_name: &str) -> EventLog {
    EventLog {
        name: format!("{LOG_NAME_PREFIX}{process_name}"),
        extensions: vec![Extension::Concept, Extension::Lifecycle, Extension::Time],
        classifiers: vec![Classifier::EventName],
        lifecycle_model: STANDARD_LIFECYCLE_MODEL.to_string(),
        legend: String::new(),
        traces: Vec::new(),
    }
}

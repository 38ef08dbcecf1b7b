//! In-memory event log produced by the generator.
//!
//! The log owns its traces and every trace owns its events. Nothing is
//! mutated after it has been appended.

use chrono::{DateTime, Utc};

/// Atomic identifier emitted by one step of a walk over the automaton.
pub type Symbol = char;

/// Lifecycle transition of an event. Generated events are always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Complete,
}

impl Lifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Complete => "complete",
        }
    }
}

/// A single task execution inside a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub task_name: String,
    pub timestamp: DateTime<Utc>,
    pub lifecycle: Lifecycle,
}

impl Event {
    pub fn complete(task_name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            task_name: task_name.into(),
            timestamp,
            lifecycle: Lifecycle::Complete,
        }
    }
}

/// Textual renderings of a trace, kept for the plain-strings output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEncodings {
    /// `<a=Task A;b=Task B>`, or `>` for an empty trace.
    pub char_mapped: String,

    /// `ab`, or the empty string for an empty trace.
    pub symbols: String,
}

/// An ordered sequence of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub name: String,
    pub events: Vec<Event>,

    /// Present only for traces within the retention cap.
    pub encodings: Option<TraceEncodings>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Standard XES extensions declared on generated logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Concept,
    Lifecycle,
    Time,
}

impl Extension {
    pub fn name(&self) -> &'static str {
        match self {
            Extension::Concept => "Concept",
            Extension::Lifecycle => "Lifecycle",
            Extension::Time => "Time",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Extension::Concept => "concept",
            Extension::Lifecycle => "lifecycle",
            Extension::Time => "time",
        }
    }

    pub fn uri(&self) -> &'static str {
        match self {
            Extension::Concept => "http://www.xes-standard.org/concept.xesext",
            Extension::Lifecycle => "http://www.xes-standard.org/lifecycle.xesext",
            Extension::Time => "http://www.xes-standard.org/time.xesext",
        }
    }
}

/// Event classifiers declared on generated logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    /// Classifies events by `concept:name`.
    EventName,
}

impl Classifier {
    pub fn name(&self) -> &'static str {
        match self {
            Classifier::EventName => "Event Name",
        }
    }

    pub fn keys(&self) -> &'static str {
        match self {
            Classifier::EventName => "concept:name",
        }
    }
}

/// A generated event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    pub name: String,
    pub extensions: Vec<Extension>,
    pub classifiers: Vec<Classifier>,

    /// Lifecycle model the events' transitions belong to.
    pub lifecycle_model: String,

    /// Symbol to task name mapping, rendered once when generation starts.
    pub legend: String,

    /// Traces in generation order.
    pub traces: Vec<Trace>,
}

impl EventLog {
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Raw-symbol encodings of the retained traces, in order.
    pub fn symbol_strings(&self) -> impl Iterator<Item = &str> {
        self.traces
            .iter()
            .filter_map(|t| t.encodings.as_ref())
            .map(|e| e.symbols.as_str())
    }

    /// Char-mapped encodings of the retained traces, in order.
    pub fn char_mapped_strings(&self) -> impl Iterator<Item = &str> {
        self.traces
            .iter()
            .filter_map(|t| t.encodings.as_ref())
            .map(|e| e.char_mapped.as_str())
    }
}

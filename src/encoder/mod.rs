//! Log encodings.
//!
//! The XML encodings go through a [`LogSerializer`], so callers can swap the
//! built-in writers for their own. The plain-strings encoding is produced
//! here directly from the traces' retained textual encodings.

pub mod mxml;
pub mod strings;
pub mod xes;

pub use mxml::MxmlSerializer;
pub use strings::legend_path_for;
pub use xes::XesSerializer;

use crate::config::OutputEncoding;
use crate::error::{EncodeError, LogMakerResult};
use crate::model::EventLog;
use std::io::Write;
use std::path::Path;

/// Writes a whole log to a byte sink in one standard format.
pub trait LogSerializer {
    fn serialize(&self, log: &EventLog, sink: &mut dyn Write) -> std::io::Result<()>;
}

/// Serializers used for the XML encodings.
pub struct Serializers {
    pub xes: Box<dyn LogSerializer>,
    pub mxml: Box<dyn LogSerializer>,
}

impl Default for Serializers {
    fn default() -> Self {
        Self {
            xes: Box::new(XesSerializer),
            mxml: Box::new(MxmlSerializer),
        }
    }
}

/// Encode `log` into `sink`.
///
/// `output_path` is the primary destination; the plain-strings encoding
/// derives its legend file from it and fails without one. The sink is flushed
/// on every path, including the unsupported-encoding one.
pub fn encode<W: Write>(
    log: &EventLog,
    encoding: OutputEncoding,
    output_path: Option<&Path>,
    serializers: &Serializers,
    sink: &mut W,
) -> LogMakerResult<()> {
    match encoding {
        OutputEncoding::Xes => serializers.xes.serialize(log, sink)?,
        OutputEncoding::Mxml => serializers.mxml.serialize(log, sink)?,
        OutputEncoding::Strings => {
            let path = output_path.ok_or(EncodeError::OutputPathNotSpecified)?;
            strings::write_strings(log, path, sink)?;
        }
        // TODO: event-table encoder (one row per event: trace, task, timestamp).
        OutputEncoding::Csv => {
            sink.flush()?;
            return Err(EncodeError::Unsupported(encoding).into());
        }
    }
    sink.flush()?;
    Ok(())
}

/// Escape text for use in XML attribute values and element content.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

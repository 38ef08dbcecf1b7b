//! Legacy MXML writer, as read by ProM 5 and earlier.

use super::{escape_xml, LogSerializer};
use crate::model::EventLog;
use chrono::SecondsFormat;
use std::io::{self, Write};

/// Writes logs as MXML, one `ProcessInstance` per trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct MxmlSerializer;

impl LogSerializer for MxmlSerializer {
    fn serialize(&self, log: &EventLog, sink: &mut dyn Write) -> io::Result<()> {
        let log_name = escape_xml(&log.name);

        writeln!(sink, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
        writeln!(
            sink,
            "<WorkflowLog xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:noNamespaceSchemaLocation=\"http://is.tm.tue.nl/research/processmining/WorkflowLog.xsd\" \
             description=\"{log_name}\">"
        )?;
        writeln!(sink, "\t<Source program=\"declare-logmaker\"/>")?;
        writeln!(sink, "\t<Process id=\"{log_name}\" description=\"{log_name}\">")?;

        for trace in &log.traces {
            let trace_name = escape_xml(&trace.name);
            writeln!(
                sink,
                "\t\t<ProcessInstance id=\"{trace_name}\" description=\"{trace_name}\">"
            )?;
            for event in &trace.events {
                writeln!(sink, "\t\t\t<AuditTrailEntry>")?;
                writeln!(
                    sink,
                    "\t\t\t\t<WorkflowModelElement>{}</WorkflowModelElement>",
                    escape_xml(&event.task_name)
                )?;
                writeln!(sink, "\t\t\t\t<EventType>{}</EventType>", event.lifecycle.as_str())?;
                writeln!(
                    sink,
                    "\t\t\t\t<Timestamp>{}</Timestamp>",
                    event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, false)
                )?;
                writeln!(sink, "\t\t\t</AuditTrailEntry>")?;
            }
            writeln!(sink, "\t\t</ProcessInstance>")?;
        }

        writeln!(sink, "\t</Process>")?;
        writeln!(sink, "</WorkflowLog>")
    }
}

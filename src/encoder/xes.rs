//! IEEE XES writer.

use super::{escape_xml, LogSerializer};
use crate::model::{EventLog, Trace};
use chrono::SecondsFormat;
use std::io::{self, Write};

/// Writes logs as XES 1.0 XML.
#[derive(Debug, Clone, Copy, Default)]
pub struct XesSerializer;

impl LogSerializer for XesSerializer {
    fn serialize(&self, log: &EventLog, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
        writeln!(sink, "<!-- This file has been generated by declare-logmaker -->")?;
        writeln!(
            sink,
            r#"<log xes.version="1.0" xes.features="nested-attributes" xmlns="http://www.xes-standard.org/">"#
        )?;
        for ext in &log.extensions {
            writeln!(
                sink,
                "\t<extension name=\"{}\" prefix=\"{}\" uri=\"{}\"/>",
                ext.name(),
                ext.prefix(),
                ext.uri()
            )?;
        }
        for classifier in &log.classifiers {
            writeln!(
                sink,
                "\t<classifier name=\"{}\" keys=\"{}\"/>",
                classifier.name(),
                classifier.keys()
            )?;
        }
        write_string_attr(sink, 1, "concept:name", &log.name)?;
        write_string_attr(sink, 1, "lifecycle:model", &log.lifecycle_model)?;

        for trace in &log.traces {
            write_trace(sink, trace)?;
        }

        writeln!(sink, "</log>")
    }
}

fn write_trace(sink: &mut dyn Write, trace: &Trace) -> io::Result<()> {
    writeln!(sink, "\t<trace>")?;
    write_string_attr(sink, 2, "concept:name", &trace.name)?;
    for event in &trace.events {
        writeln!(sink, "\t\t<event>")?;
        write_string_attr(sink, 3, "concept:name", &event.task_name)?;
        write_string_attr(sink, 3, "lifecycle:transition", event.lifecycle.as_str())?;
        writeln!(
            sink,
            "\t\t\t<date key=\"time:timestamp\" value=\"{}\"/>",
            event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, false)
        )?;
        writeln!(sink, "\t\t</event>")?;
    }
    writeln!(sink, "\t</trace>")
}

fn write_string_attr(sink: &mut dyn Write, depth: usize, key: &str, value: &str) -> io::Result<()> {
    writeln!(
        sink,
        "{}<string key=\"{key}\" value=\"{}\"/>",
        "\t".repeat(depth),
        escape_xml(value)
    )
}

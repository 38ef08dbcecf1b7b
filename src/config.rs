//! Log generation parameters.
//!
//! A [`GenerationConfig`] can only be obtained through its builder (or by
//! deserializing one), both of which validate the parameters. Once built it is
//! immutable, so the generator never has to re-check it.

use crate::builder::impl_builder;
use crate::encoder::legend_path_for;
use crate::error::{ConfigError, LogMakerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output encoding of a generated log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// IEEE XES (eXtensible Event Stream) XML.
    Xes,

    /// Legacy ProM MXML.
    Mxml,

    /// One line of raw symbols per trace, plus a `_legend.txt` sibling file
    /// mapping symbols to task names.
    Strings,

    /// Comma-separated event table. Recognized, but no encoder exists yet.
    Csv,
}

impl OutputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputEncoding::Xes => "xes",
            OutputEncoding::Mxml => "mxml",
            OutputEncoding::Strings => "strings",
            OutputEncoding::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xes" => Ok(OutputEncoding::Xes),
            "mxml" => Ok(OutputEncoding::Mxml),
            "strings" => Ok(OutputEncoding::Strings),
            "csv" => Ok(OutputEncoding::Csv),
            _ => Err(ConfigError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Validated parameters for one log generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "GenerationConfigBuilder")]
pub struct GenerationConfig {
    /// Number of traces in the log.
    traces_in_log: usize,

    /// How many of the traces (the last ones) are drawn from the automaton
    /// that also accepts violating behavior.
    violating_in_log: usize,

    /// Minimum number of events per trace.
    min_events_per_trace: usize,

    /// Maximum number of events per trace.
    max_events_per_trace: usize,

    /// Number of leading traces whose textual encodings are retained for the
    /// plain-strings output.
    max_retained_encodings: usize,

    output_encoding: Option<OutputEncoding>,

    output_path: Option<PathBuf>,

    /// Seed for the timestamp generator. Drawn from the OS when absent.
    seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            traces_in_log: 100,
            violating_in_log: 0,
            min_events_per_trace: 0,
            max_events_per_trace: 100,
            max_retained_encodings: usize::MAX,
            output_encoding: None,
            output_path: None,
            seed: None,
        }
    }
}

impl_builder!(GenerationConfig, GenerationConfigBuilder {
    required {
        traces_in_log: usize,
    }
    optional {
        violating_in_log: usize,
        min_events_per_trace: usize,
        max_events_per_trace: usize,
        max_retained_encodings: usize,
    }
    optional_or {
        output_encoding: OutputEncoding,
        output_path: PathBuf,
        seed: u64,
    }
});

impl GenerationConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.violating_in_log > self.traces_in_log {
            return Err(ConfigError::ViolatingExceedsTotal {
                violating: self.violating_in_log,
                total: self.traces_in_log,
            });
        }
        if self.min_events_per_trace > self.max_events_per_trace {
            return Err(ConfigError::MinExceedsMax {
                min: self.min_events_per_trace,
                max: self.max_events_per_trace,
            });
        }
        match (self.output_encoding, &self.output_path) {
            (Some(encoding @ OutputEncoding::Strings), None) => {
                return Err(ConfigError::MissingOutputPath { encoding });
            }
            (Some(OutputEncoding::Strings), Some(path)) if legend_path_for(path).is_err() => {
                return Err(ConfigError::LegendPathUnderivable { path: path.clone() });
            }
            _ => {}
        }
        Ok(self)
    }

    /// Parse and validate a JSON configuration object.
    ///
    /// Field names match the builder setters; every field but
    /// `traces_in_log` may be omitted.
    pub fn from_json_str(json: &str) -> LogMakerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> LogMakerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn traces_in_log(&self) -> usize {
        self.traces_in_log
    }

    pub fn violating_in_log(&self) -> usize {
        self.violating_in_log
    }

    /// Number of leading traces drawn from the compliant automaton only.
    pub fn compliant_in_log(&self) -> usize {
        self.traces_in_log - self.violating_in_log
    }

    pub fn min_events_per_trace(&self) -> usize {
        self.min_events_per_trace
    }

    pub fn max_events_per_trace(&self) -> usize {
        self.max_events_per_trace
    }

    pub fn max_retained_encodings(&self) -> usize {
        self.max_retained_encodings
    }

    pub fn output_encoding(&self) -> Option<OutputEncoding> {
        self.output_encoding
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

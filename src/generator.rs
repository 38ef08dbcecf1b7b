//! Trace generation from bounded walks.
//!
//! [`generate`] draws every trace of a log from two walkers: the first
//! `N - V` traces come from the walker over the compliant automaton, the last
//! `V` from the walker over the automaton that also accepts violations. The
//! split is positional, so the same parameters always put compliant and
//! possibly-violating traces at the same indices.
//!
//! [`LogMaker`] wraps generation and encoding behind one object that owns the
//! single active log.

use crate::assembler::assemble;
use crate::config::{GenerationConfig, OutputEncoding};
use crate::encoder::{self, legend_path_for, LogSerializer, Serializers};
use crate::error::{EncodeError, GenerationError, LogMakerResult};
use crate::model::{Event, EventLog, Trace, TraceEncodings};
use crate::timestamp::TimestampSynthesizer;
use crate::walker::{BoundedWalker, SymbolArchive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Prefix of every generated trace's name; the zero-padded index follows.
pub const TRACE_NAME_PREFIX: &str = "Synthetic trace no. ";

pub const START_OF_SEQUENCE: char = '<';
pub const END_OF_SEQUENCE: char = '>';
pub const CHAR_TASKNAME_SEPARATOR: char = '=';
pub const SEQUENCE_EVENT_SEPARATOR: char = ';';

/// Render the archive as the comment header of a legend file:
/// `# Legend:\n# {a=Task A, b=Task B}\n`.
pub fn render_legend(archive: &dyn SymbolArchive) -> String {
    let mapping = archive
        .entries()
        .iter()
        .map(|(symbol, task)| format!("{symbol}{CHAR_TASKNAME_SEPARATOR}{task}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("# Legend:\n# {{{mapping}}}\n")
}

/// Digits needed to zero-pad trace indices of a log with `traces` traces,
/// i.e. `ceil(log10(traces))`, and no padding for one trace or fewer.
fn trace_name_width(traces: usize) -> usize {
    let mut width = 0;
    let mut bound: usize = 1;
    while bound < traces {
        width += 1;
        bound = bound.saturating_mul(10);
    }
    width
}

/// Accumulates the two textual renderings of a trace while it is walked.
struct EncodingBuffers {
    char_mapped: String,
    symbols: String,
}

impl EncodingBuffers {
    fn new() -> Self {
        Self {
            char_mapped: String::from(START_OF_SEQUENCE),
            symbols: String::new(),
        }
    }

    fn push(&mut self, symbol: char, task: &str) {
        self.symbols.push(symbol);
        self.char_mapped.push(symbol);
        self.char_mapped.push(CHAR_TASKNAME_SEPARATOR);
        self.char_mapped.push_str(task);
        self.char_mapped.push(SEQUENCE_EVENT_SEPARATOR);
    }

    /// Close the char-mapped sequence. The trailing separator is replaced by
    /// the end marker; an empty trace renders as the end marker alone.
    fn finish(mut self) -> TraceEncodings {
        let char_mapped = if self.symbols.is_empty() {
            END_OF_SEQUENCE.to_string()
        } else {
            self.char_mapped.pop();
            self.char_mapped.push(END_OF_SEQUENCE);
            self.char_mapped
        };
        TraceEncodings {
            char_mapped,
            symbols: self.symbols,
        }
    }
}

/// Generate a complete log for `process_name`.
///
/// Trace `i` is drawn from `compliant` when `i < N - V` and from `combined`
/// otherwise. Without a `combined` walker every trace comes from `compliant`.
/// Textual encodings are kept for the first `max_retained_encodings` traces.
pub fn generate<R: Rng>(
    config: &GenerationConfig,
    process_name: &str,
    compliant: &mut dyn BoundedWalker,
    mut combined: Option<&mut dyn BoundedWalker>,
    archive: &dyn SymbolArchive,
    timestamps: &mut TimestampSynthesizer<R>,
) -> Result<EventLog, GenerationError> {
    let total = config.traces_in_log();
    let compliant_count = config.compliant_in_log();
    let width = trace_name_width(total);

    info!(
        process = process_name,
        traces = total,
        violating = config.violating_in_log(),
        min_events = config.min_events_per_trace(),
        max_events = config.max_events_per_trace(),
        "Generating synthetic log"
    );

    let mut log = assemble(process_name);
    log.legend = render_legend(archive);
    log.traces.reserve(total);

    for index in 0..total {
        let from_compliant = index < compliant_count || combined.is_none();
        let walker: &mut dyn BoundedWalker = match combined.as_deref_mut() {
            Some(w) if !from_compliant => w,
            _ => &mut *compliant,
        };
        walker.reset_to_start();

        let mut events = Vec::new();
        let mut buffers = EncodingBuffers::new();
        let mut last_timestamp = None;

        while let Some(symbol) = walker.step() {
            let task = archive
                .resolve(symbol)
                .ok_or(GenerationError::UnknownSymbol { trace: index, symbol })?;
            buffers.push(symbol, task);

            let timestamp = timestamps.next(last_timestamp);
            last_timestamp = Some(timestamp);
            events.push(Event::complete(task, timestamp));
        }

        debug!(
            trace = index,
            compliant_source = from_compliant,
            events = events.len(),
            "Generated trace"
        );

        let encodings = (index < config.max_retained_encodings()).then(|| buffers.finish());
        log.traces.push(Trace {
            name: format!("{TRACE_NAME_PREFIX}{index:0width$}"),
            events,
            encodings,
        });
    }

    info!(traces = log.traces.len(), "Synthetic log generated");
    Ok(log)
}

/// Generates synthetic logs and stores them in the configured encoding.
///
/// Holds at most one log: every [`create_log`](Self::create_log) call
/// replaces the previous one.
pub struct LogMaker {
    config: GenerationConfig,
    log: Option<EventLog>,
    rng: StdRng,
    serializers: Serializers,
}

impl LogMaker {
    pub fn new(config: GenerationConfig) -> Self {
        let rng = seeded_rng(&config);
        Self {
            config,
            log: None,
            rng,
            serializers: Serializers::default(),
        }
    }

    /// Replace the XES and MXML serializers.
    pub fn with_serializers(
        mut self,
        xes: Box<dyn LogSerializer>,
        mxml: Box<dyn LogSerializer>,
    ) -> Self {
        self.serializers = Serializers { xes, mxml };
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Switch to new parameters. The current log, if any, is discarded.
    pub fn set_config(&mut self, config: GenerationConfig) {
        self.rng = seeded_rng(&config);
        self.config = config;
        self.log = None;
    }

    /// The most recently generated log.
    pub fn log(&self) -> Option<&EventLog> {
        self.log.as_ref()
    }

    /// Generate a new log, discarding the previous one.
    ///
    /// `violating` walks the automaton accepting both compliant and violating
    /// behavior; when absent, all traces are drawn from `compliant`.
    pub fn create_log(
        &mut self,
        process_name: &str,
        compliant: &mut dyn BoundedWalker,
        violating: Option<&mut dyn BoundedWalker>,
        archive: &dyn SymbolArchive,
    ) -> LogMakerResult<&EventLog> {
        self.log = None;
        let mut timestamps = TimestampSynthesizer::new(&mut self.rng);
        let log = generate(
            &self.config,
            process_name,
            compliant,
            violating,
            archive,
            &mut timestamps,
        )?;
        Ok(self.log.insert(log))
    }

    /// Store the log in the configured output file and return its path.
    pub fn store_log(&self) -> LogMakerResult<PathBuf> {
        let (log, encoding) = self.encoding_preconditions()?;
        let path = self
            .config
            .output_path()
            .ok_or(EncodeError::OutputPathNotSpecified)?;
        if encoding == OutputEncoding::Strings {
            // Fail before the primary file exists.
            legend_path_for(path)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        encoder::encode(log, encoding, Some(path), &self.serializers, &mut writer)?;
        writer.flush()?;

        info!(path = %path.display(), %encoding, "Stored synthetic log");
        Ok(path.to_path_buf())
    }

    /// Render the log in the configured encoding.
    ///
    /// With the plain-strings encoding the legend is still written to the
    /// file derived from the configured output path.
    pub fn print_encoded_log(&self) -> LogMakerResult<String> {
        let mut buffer = Vec::new();
        self.encode_into(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    /// Write the log in the configured encoding to `sink`.
    pub fn encode_into<W: Write>(&self, sink: &mut W) -> LogMakerResult<()> {
        let (log, encoding) = self.encoding_preconditions()?;
        encoder::encode(
            log,
            encoding,
            self.config.output_path(),
            &self.serializers,
            sink,
        )
    }

    fn encoding_preconditions(&self) -> Result<(&EventLog, OutputEncoding), EncodeError> {
        let log = self.log.as_ref().ok_or(EncodeError::LogNotGenerated)?;
        let encoding = self
            .config
            .output_encoding()
            .ok_or(EncodeError::EncodingNotSpecified)?;
        Ok((log, encoding))
    }
}

fn seeded_rng(config: &GenerationConfig) -> StdRng {
    match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

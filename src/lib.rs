//! declare-logmaker: synthetic event logs from declarative process models.
//!
//! Generates labeled traces that comply with, or deliberately violate, a
//! declarative process specification, for use as test and training data in
//! process mining. The specification itself is compiled elsewhere into
//! automata whose runs are bounded to the wanted trace lengths; this crate
//! consumes random walks over them:
//!
//! 1. A [`BoundedWalker`] over the compliant automaton produces the first
//!    `N - V` traces.
//! 2. A [`BoundedWalker`] over the automaton that also accepts violations
//!    produces the last `V` traces.
//! 3. A [`SymbolArchive`] translates walk symbols into task names, and every
//!    event gets a plausible, monotonic timestamp.
//! 4. The log is encoded as XES, MXML or plain strings with a legend file.
//!
//! # Quick Start
//!
//! ```ignore
//! use declare_logmaker::*;
//!
//! let config = GenerationConfig::builder()
//!     .traces_in_log(100usize)
//!     .violating_in_log(10usize)
//!     .min_events_per_trace(2usize)
//!     .max_events_per_trace(8usize)
//!     .output_encoding(OutputEncoding::Xes)
//!     .output_path("synthetic.xes")
//!     .build()?;
//!
//! let mut maker = LogMaker::new(config);
//! maker.create_log("Loan application", &mut compliant, Some(&mut violating), &archive)?;
//! maker.store_log()?;
//! ```

mod builder;
pub mod assembler;
pub mod config;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod model;
pub mod timestamp;
pub mod walker;

// Re-export core types for convenience
pub use assembler::assemble;
pub use config::{GenerationConfig, GenerationConfigBuilder, OutputEncoding};
pub use encoder::{legend_path_for, LogSerializer, MxmlSerializer, XesSerializer};
pub use error::{ConfigError, EncodeError, Error, GenerationError, LogMakerResult};
pub use generator::{generate, render_legend, LogMaker};
pub use model::{Event, EventLog, Lifecycle, Symbol, Trace, TraceEncodings};
pub use timestamp::TimestampSynthesizer;
pub use walker::{BoundedWalker, SymbolArchive, TaskCharArchive};

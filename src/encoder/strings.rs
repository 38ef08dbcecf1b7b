//! Plain-strings encoding: raw symbol lines plus a legend file.
//!
//! The primary output holds one line per retained trace with its symbols
//! concatenated (`abca`). The legend file holds the symbol-to-task mapping
//! followed by one char-mapped line per retained trace
//! (`<a=Send docs;b=Receive grant>`).

use crate::error::{EncodeError, LogMakerResult};
use crate::model::EventLog;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Appended to the output path (minus its extension) to name the legend file.
pub const LEGEND_SUFFIX: &str = "_legend.txt";

/// Characters stripped from the output path before appending the suffix.
const EXTENSION_CHARS: usize = 4;

/// Legend file path for `output`: the last four characters (a three-letter
/// extension and its dot) are replaced by `_legend.txt`, so `log.txt`
/// becomes `log_legend.txt`.
pub fn legend_path_for(output: &Path) -> Result<PathBuf, EncodeError> {
    let underivable = || EncodeError::LegendPathUnderivable {
        path: output.to_path_buf(),
    };
    let text = output.to_str().ok_or_else(underivable)?;
    let cut = text
        .char_indices()
        .rev()
        .nth(EXTENSION_CHARS - 1)
        .map(|(i, _)| i)
        .ok_or_else(underivable)?;
    Ok(PathBuf::from(format!("{}{LEGEND_SUFFIX}", &text[..cut])))
}

/// Write the symbol lines to `sink` and the legend next to `output_path`.
///
/// Returns the legend file's path.
pub(crate) fn write_strings<W: Write>(
    log: &EventLog,
    output_path: &Path,
    sink: &mut W,
) -> LogMakerResult<PathBuf> {
    let legend_path = legend_path_for(output_path)?;

    for line in log.symbol_strings() {
        writeln!(sink, "{line}")?;
    }
    sink.flush()?;

    let mut legend = BufWriter::new(File::create(&legend_path)?);
    writeln!(legend, "{}", log.legend)?;
    for line in log.char_mapped_strings() {
        writeln!(legend, "{line}")?;
    }
    legend.flush()?;

    info!(
        log = %output_path.display(),
        legend = %legend_path.display(),
        "Strings log created with legend"
    );
    Ok(legend_path)
}

// Output channels and per-statement execution snapshots

use crate::interpreter::errors::RuntimeError;
use crate::memory::SymbolStore;
use crate::parser::ast::SourceLocation;
use crate::parser::ParseError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which logical channel an output line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Effects,
    Diagnostics,
}

/// A line on the effects or diagnostics channel with source location tracking
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLine {
    pub channel: Channel,
    pub text: String,
    pub location: SourceLocation,
}

/// The three append-only output streams of one run.
///
/// Effects and diagnostics are kept in one sequence so their relative order
/// is preserved for the viewer; [`Channels::effects`] and
/// [`Channels::diagnostics`] give the per-channel views.
#[derive(Debug, Clone, Default)]
pub struct Channels {
    trace: Vec<String>,
    output: Vec<OutputLine>,
}

impl Channels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rendered statement block to the trace channel
    pub fn push_trace(&mut self, block: String) {
        self.trace.push(block);
    }

    pub fn push_effect(&mut self, text: String, location: SourceLocation) {
        self.output.push(OutputLine {
            channel: Channel::Effects,
            text,
            location,
        });
    }

    pub fn push_diagnostic(&mut self, error: &RuntimeError) {
        self.output.push(OutputLine {
            channel: Channel::Diagnostics,
            text: error.diagnostic_line(),
            location: *error.location(),
        });
    }

    /// Trace blocks, one per executed statement
    pub fn trace_blocks(&self) -> &[String] {
        &self.trace
    }

    /// Effects and diagnostics in the order they were produced
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    pub fn effects(&self) -> impl Iterator<Item = &str> {
        self.lines_on(Channel::Effects)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.lines_on(Channel::Diagnostics)
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics().count()
    }

    fn lines_on(&self, channel: Channel) -> impl Iterator<Item = &str> {
        self.output
            .iter()
            .filter(move |line| line.channel == channel)
            .map(|line| line.text.as_str())
    }

    /// Full trace channel contents
    pub fn trace_text(&self) -> String {
        self.trace.concat()
    }

    /// Full effects channel contents, newline terminated
    pub fn effects_text(&self) -> String {
        self.effects().map(|line| format!("{}\n", line)).collect()
    }

    /// Full diagnostics channel contents, newline terminated
    pub fn diagnostics_text(&self) -> String {
        self.diagnostics().map(|line| format!("{}\n", line)).collect()
    }

    /// Write each channel to its own file, replacing existing contents
    pub fn write_files(&self, paths: &ChannelPaths) -> io::Result<()> {
        fs::write(&paths.effects, self.effects_text())?;
        fs::write(&paths.trace, self.trace_text())?;
        fs::write(&paths.diagnostics, self.diagnostics_text())?;
        Ok(())
    }
}

/// Destination files for the three channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPaths {
    pub effects: PathBuf,
    pub trace: PathBuf,
    pub diagnostics: PathBuf,
}

impl ChannelPaths {
    pub fn new(
        effects: impl AsRef<Path>,
        trace: impl AsRef<Path>,
        diagnostics: impl AsRef<Path>,
    ) -> Self {
        ChannelPaths {
            effects: effects.as_ref().to_path_buf(),
            trace: trace.as_ref().to_path_buf(),
            diagnostics: diagnostics.as_ref().to_path_buf(),
        }
    }
}

impl ChannelPaths {
    /// Record a failed construction: no effects, no trace, one diagnostic line
    pub fn write_parse_failure(&self, err: &ParseError) -> io::Result<()> {
        fs::write(&self.effects, "")?;
        fs::write(&self.trace, "")?;
        fs::write(&self.diagnostics, format!("{}\n", err.diagnostic_line()))?;
        Ok(())
    }
}

impl Default for ChannelPaths {
    fn default() -> Self {
        ChannelPaths::new("out.txt", "tree.txt", "outError.txt")
    }
}

/// State recorded after one executed statement
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Statement that was just executed (`None` for the initial snapshot)
    pub statement_label: Option<String>,
    pub source_location: SourceLocation,
    pub symbols: SymbolStore,
    /// Number of trace blocks emitted so far
    pub trace_len: usize,
    /// Number of effects/diagnostics lines emitted so far
    pub output_len: usize,
}

/// Execution history, one snapshot per executed statement plus the initial state
#[derive(Debug, Default)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
}

impl SnapshotManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(line: usize) -> SourceLocation {
        SourceLocation::new(line, 1)
    }

    #[test]
    fn test_channels_keep_order_per_channel() {
        let mut channels = Channels::new();
        channels.push_effect("Print: 1".to_string(), loc(1));
        channels.push_diagnostic(&RuntimeError::DivisionByZero { location: loc(2) });
        channels.push_effect("Print: 2".to_string(), loc(3));

        assert_eq!(channels.effects().collect::<Vec<_>>(), vec!["Print: 1", "Print: 2"]);
        assert_eq!(
            channels.diagnostics().collect::<Vec<_>>(),
            vec!["Error: Division by zero at line 2"]
        );
        assert_eq!(channels.output()[1].channel, Channel::Diagnostics);
        assert_eq!(channels.effects_text(), "Print: 1\nPrint: 2\n");
        assert_eq!(channels.diagnostic_count(), 1);
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ChannelPaths::new(
            dir.path().join("out.txt"),
            dir.path().join("tree.txt"),
            dir.path().join("err.txt"),
        );

        let mut channels = Channels::new();
        channels.push_trace("block\n".to_string());
        channels.push_effect("Print: 9".to_string(), loc(1));
        channels.write_files(&paths).unwrap();

        assert_eq!(fs::read_to_string(&paths.effects).unwrap(), "Print: 9\n");
        assert_eq!(fs::read_to_string(&paths.trace).unwrap(), "block\n");
        assert_eq!(fs::read_to_string(&paths.diagnostics).unwrap(), "");
    }

    #[test]
    fn test_write_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ChannelPaths::new(
            dir.path().join("out.txt"),
            dir.path().join("tree.txt"),
            dir.path().join("err.txt"),
        );
        fs::write(&paths.effects, "stale\n").unwrap();

        let err = ParseError {
            message: "Expected ';' after expression, found 'print'".to_string(),
            location: SourceLocation::new(3, 1),
        };
        paths.write_parse_failure(&err).unwrap();

        assert_eq!(fs::read_to_string(&paths.effects).unwrap(), "");
        assert_eq!(
            fs::read_to_string(&paths.diagnostics).unwrap(),
            "Error: Expected ';' after expression, found 'print' at line 3\n"
        );
    }

    #[test]
    fn test_default_paths_match_classic_layout() {
        let paths = ChannelPaths::default();
        assert_eq!(paths.effects, PathBuf::from("out.txt"));
        assert_eq!(paths.trace, PathBuf::from("tree.txt"));
        assert_eq!(paths.diagnostics, PathBuf::from("outError.txt"));
    }
}

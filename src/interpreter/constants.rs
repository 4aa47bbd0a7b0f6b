// Constants for the interpreter

/// Upper bound on distinct variables in one program (ids are `0..MAX_VARIABLES`)
pub const MAX_VARIABLES: usize = 256;

/// Columns of indentation per tree depth level in the trace rendering
pub const INDENT_PER_LEVEL: usize = 5;

/// Width of the dashed line closing each trace block
pub const SEPARATOR_WIDTH: usize = 50;

/// Delay between steps while the viewer auto-plays
pub const AUTOPLAY_INTERVAL_MS: u64 = 1000;

//! Process exit codes

/// The command ran (a soft not-found still counts)
pub const EXIT_SUCCESS: i32 = 0;

/// Configuration, storage or serialization failure
pub const EXIT_ERROR: i32 = 1;

/// Rejected input, e.g. an empty title. Argument parse errors from clap
/// use the same code.
pub const EXIT_USAGE: i32 = 2;

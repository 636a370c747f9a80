use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or running a sort job.
#[derive(Error, Debug)]
pub enum SortError {
    /// The source file does not exist
    #[error("source file does not exist: {}", .0.display())]
    MissingSource(PathBuf),

    /// The directory that should receive the output file does not exist
    #[error("output directory does not exist: {}", .0.display())]
    MissingOutputDirectory(PathBuf),

    /// No sort keys were specified
    #[error("at least one sort key is required")]
    MissingKeys,

    /// An offset was specified without a limit
    #[error("offset requires a limit")]
    MissingLimit,

    /// The sqlite3 executable could not be launched
    #[error("failed to launch {}: {source}", .executable.to_string_lossy())]
    Launch {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine reported a column count mismatch during import. The
    /// declared schema does not match the source file and the job was
    /// aborted.
    #[error("schema mismatch:\n{details}")]
    SchemaMismatch { details: String },

    /// The engine exited abnormally
    #[error("sqlite3 exited with code {}:\n{details}", exit_code(.code))]
    Engine { code: Option<i32>, details: String },

    /// A filesystem operation around the run failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

use std::path::PathBuf;

/// Configuration of the external sqlite3 process and its database file.
///
/// The database file is a per-job scratch artifact. When no path is given it
/// is derived from the output path by replacing the extension with `db`. It
/// is removed before the run if present, and removed again after the run
/// unless `keep_database` is set. No two concurrent jobs may share a
/// database path.
///
/// # Examples
/// ```
/// use sqlite_file_sort::engine::Engine;
/// let engine = Engine::new()
///     .with_executable("/usr/bin/sqlite3")
///     .with_keep_database(true);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    database: Option<PathBuf>,
    keep_database: bool,
    executable: PathBuf,
    build_index: bool,
}

impl Engine {
    /// Create a default [Engine] definition.
    ///
    /// * the database path is derived from the output path
    /// * the database is removed after the run
    /// * the executable is `sqlite3`, resolved through PATH
    /// * an index over the sort keys is created before the query
    pub fn new() -> Engine {
        Engine {
            database: None,
            keep_database: false,
            executable: PathBuf::from("sqlite3"),
            build_index: true,
        }
    }

    /// Get the database path, when one was set explicitly.
    pub fn database(&self) -> Option<&PathBuf> {
        self.database.as_ref()
    }

    /// Get the keep database setting.
    pub fn keep_database(&self) -> bool {
        self.keep_database
    }

    /// Get the sqlite3 executable path.
    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Get the build index setting.
    pub fn build_index(&self) -> bool {
        self.build_index
    }

    /// Specify the database file path.
    pub fn with_database(mut self, database: impl Into<PathBuf>) -> Engine {
        self.database = Some(database.into());
        self
    }

    /// Specify whether to keep the database file after the run.
    pub fn with_keep_database(mut self, keep_database: bool) -> Engine {
        self.keep_database = keep_database;
        self
    }

    /// Specify the sqlite3 executable to launch.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Engine {
        self.executable = executable.into();
        self
    }

    /// Specify whether to create an index on the sort key columns before
    /// running the query.
    pub fn with_build_index(mut self, build_index: bool) -> Engine {
        self.build_index = build_index;
        self
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

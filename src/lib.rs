//! This crate sorts and filters very large delimited text files, for example
//! CSV, TSV or PSV, without loading them into memory.
//!
//! Instead of implementing a sort algorithm the crate generates a script for
//! the [sqlite3 command line shell](https://www.sqlite.org/cli.html) and
//! delegates import, indexing, sorting and export to that process. The shell
//! streams rows from the source file into a scratch database, runs a single
//! query with the requested order, filter, projection and window, and writes
//! the result to the destination file. Files far larger than available
//! memory sort this way, at the cost of requiring a `sqlite3` binary on the
//! machine.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use sqlite_file_sort::sort::Sort;
//!
//! fn sort_by_id(input: PathBuf, output: PathBuf) -> Result<(), sqlite_file_sort::error::SortError> {
//!     let mut sort = Sort::new(input, output);
//!     // bare strings become ascending sort keys
//!     sort.add_key("id");
//!     // inspect what will be submitted to the shell
//!     let script = sort.script()?;
//!     log::debug!("{}", script);
//!     sort.sort()
//! }
//! ```

pub(crate) mod config;
pub(crate) mod ident;
pub(crate) mod process;
pub(crate) mod script;

pub mod column;
pub mod column_type;
pub mod data_file;
pub mod engine;
pub mod error;
pub mod key;
pub mod order;
pub mod sort;

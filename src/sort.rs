use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::column::Column;
use crate::config::Config;
use crate::data_file::DataFile;
use crate::engine::Engine;
use crate::error::SortError;
use crate::key::SortKey;
use crate::process;
use crate::script;

/// A line sink receiving every log worthy event of a job - pre-run
/// deletions, the generated script, tagged engine output and cleanup
/// markers. The default sink discards everything.
pub type Logger = Arc<dyn Fn(&str) + Send + Sync>;

/// Sort a delimited text file with the sqlite3 command line shell
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use sqlite_file_sort::error::SortError;
/// use sqlite_file_sort::key::SortKey;
/// use sqlite_file_sort::order::Order;
/// use sqlite_file_sort::sort::Sort;
///
/// // sort release records by code, newest version first
/// fn sort_releases(input: PathBuf, output: PathBuf) -> Result<(), SortError> {
///     let mut sort = Sort::new(input, output);
///     sort.add_key("code");
///     sort.add_key(SortKey::new("version").with_order(Order::Desc));
///     sort.with_filter("code <> 'retired'");
///     sort.sort()
/// }
/// ```
pub struct Sort {
    input: DataFile,
    output: DataFile,
    schema: Vec<Column>,
    select: Vec<String>,
    keys: Vec<SortKey>,
    filter: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
    engine: Engine,
    logger: Logger,
}

impl Sort {
    /// Create a default Sort definition.
    ///
    /// * the field delimiter of both files is ',' unless set on the [DataFile]
    /// * no schema is declared - the header line supplies the column names
    /// * all columns are selected
    /// * no filter is applied
    /// * the [Engine] defaults apply - the database file is derived from the
    ///   output path, removed after the run, and an index is created on the
    ///   sort keys
    /// * the log sink discards everything
    ///
    /// At least one sort key must be added before calling [Sort::sort].
    pub fn new(input: impl Into<DataFile>, output: impl Into<DataFile>) -> Sort {
        Sort {
            input: input.into(),
            output: output.into(),
            schema: vec![],
            select: vec![],
            keys: vec![],
            filter: None,
            offset: None,
            limit: None,
            engine: Engine::new(),
            logger: Arc::new(|_line| {}),
        }
    }

    /// Add a sort key. Keys apply in the order they were added - the first
    /// key is the primary sort key.
    pub fn add_key(&mut self, key: impl Into<SortKey>) {
        self.keys.push(key.into());
    }

    /// Replace all sort keys with the `keys` value.
    pub fn with_keys(&mut self, keys: Vec<SortKey>) {
        self.keys = keys;
    }

    /// Add a schema column. When a schema is declared it must describe every
    /// column of the source file in physical order, and the header line of
    /// the source file is skipped on import.
    pub fn add_column(&mut self, column: impl Into<Column>) {
        self.schema.push(column.into());
    }

    /// Replace the schema with the `schema` value.
    pub fn with_schema(&mut self, schema: Vec<Column>) {
        self.schema = schema;
    }

    /// Add a column to the output projection. The default is to write all
    /// columns in their original order.
    pub fn add_select(&mut self, name: impl Into<String>) {
        self.select.push(name.into());
    }

    /// Replace the output projection with the `select` value.
    pub fn with_select(&mut self, select: Vec<String>) {
        self.select = select;
    }

    /// Set a raw filter expression appended verbatim to the query as its
    /// where clause. The expression is not validated or escaped.
    pub fn with_filter(&mut self, filter: impl Into<String>) {
        self.filter = Some(filter.into());
    }

    /// Skip `offset` rows of the sorted result. Requires a limit.
    pub fn with_offset(&mut self, offset: u64) {
        self.offset = Some(offset);
    }

    /// Write at most `limit` rows of the sorted result.
    pub fn with_limit(&mut self, limit: u64) {
        self.limit = Some(limit);
    }

    /// Set [Engine]
    pub fn with_engine(&mut self, engine: Engine) {
        self.engine = engine;
    }

    /// Set the log sink. The sink receives one line per call and replaces
    /// any direct output device concern inside the crate.
    pub fn with_logger(&mut self, logger: impl Fn(&str) + Send + Sync + 'static) {
        self.logger = Arc::new(logger);
    }

    /// Sort the input file into the output file.
    ///
    /// Runs validation, script generation and the engine, and removes the
    /// database file on every exit path unless the [Engine] keeps it.
    pub fn sort(&self) -> Result<(), SortError> {
        let config = self.create_config();
        log::info!("Start sorting {}", config.input().to_string_lossy());
        let result = Self::execute(&config);
        let cleanup = Self::cleanup(&config);
        result?;
        cleanup?;
        log::info!("Finished sorting {}", config.input().to_string_lossy());
        Ok(())
    }

    /// Render the exact script that [Sort::sort] would submit to the engine,
    /// without touching the filesystem. The text is deterministic for a
    /// given definition.
    pub fn script(&self) -> Result<String, SortError> {
        let config = self.create_config();
        if config.keys().is_empty() {
            return Err(SortError::MissingKeys);
        }
        if config.offset().is_some() && config.limit().is_none() {
            return Err(SortError::MissingLimit);
        }
        Ok(script::generate(&config))
    }

    fn create_config(&self) -> Config {
        let database = match self.engine.database() {
            Some(path) => path.clone(),
            None => self.output.path().with_extension("db"),
        };
        Config::new(
            self.input.path().clone(),
            self.input.delimiter(),
            self.output.path().clone(),
            self.output.delimiter(),
            self.schema.clone(),
            self.select.clone(),
            self.keys.clone(),
            self.filter.clone(),
            self.offset,
            self.limit,
            database,
            self.engine.keep_database(),
            self.engine.executable().clone(),
            self.engine.build_index(),
            self.logger.clone(),
        )
    }

    fn execute(config: &Config) -> Result<(), SortError> {
        Self::validate(config)?;
        let script = script::generate(config);
        config.log(&format!(
            "Opening database {} with {}",
            config.database().to_string_lossy(),
            config.executable().to_string_lossy()
        ));
        for line in script.lines() {
            config.log(&format!("> {}", line));
        }
        process::run(config, &script)?;
        Ok(())
    }

    fn validate(config: &Config) -> Result<(), SortError> {
        if !config.input().exists() {
            return Err(SortError::MissingSource(config.input().clone()));
        }
        let folder = match config.output().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !folder.exists() {
            return Err(SortError::MissingOutputDirectory(folder));
        }
        if config.keys().is_empty() {
            return Err(SortError::MissingKeys);
        }
        if config.offset().is_some() && config.limit().is_none() {
            return Err(SortError::MissingLimit);
        }

        if config.output().exists() {
            fs::remove_file(config.output())?;
            config.log(&format!(
                "Removed existing output file {}",
                config.output().to_string_lossy()
            ));
        }
        if config.database().exists() {
            fs::remove_file(config.database())?;
            config.log(&format!(
                "Removed existing database {}",
                config.database().to_string_lossy()
            ));
        }
        Ok(())
    }

    fn cleanup(config: &Config) -> Result<(), SortError> {
        config.log("Cleaning up");
        if !config.keep_database() && config.database().exists() {
            fs::remove_file(config.database())?;
            config.log(&format!(
                "Removed database {}",
                config.database().to_string_lossy()
            ));
        }
        Ok(())
    }
}

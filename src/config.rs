use std::path::PathBuf;

use crate::column::Column;
use crate::key::SortKey;
use crate::sort::Logger;

#[derive(Clone)]
pub(crate) struct Config {
    input: PathBuf,
    input_delimiter: char,
    output: PathBuf,
    output_delimiter: char,
    schema: Vec<Column>,
    select: Vec<String>,
    keys: Vec<SortKey>,
    filter: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
    database: PathBuf,
    keep_database: bool,
    executable: PathBuf,
    build_index: bool,
    logger: Logger,
}

impl Config {
    pub(crate) fn new(
        input: PathBuf,
        input_delimiter: char,
        output: PathBuf,
        output_delimiter: char,
        schema: Vec<Column>,
        select: Vec<String>,
        keys: Vec<SortKey>,
        filter: Option<String>,
        offset: Option<u64>,
        limit: Option<u64>,
        database: PathBuf,
        keep_database: bool,
        executable: PathBuf,
        build_index: bool,
        logger: Logger,
    ) -> Config {
        Config {
            input,
            input_delimiter,
            output,
            output_delimiter,
            schema,
            select,
            keys,
            filter,
            offset,
            limit,
            database,
            keep_database,
            executable,
            build_index,
            logger,
        }
    }

    pub(crate) fn input(&self) -> &PathBuf {
        &self.input
    }

    pub(crate) fn input_delimiter(&self) -> char {
        self.input_delimiter
    }

    pub(crate) fn output(&self) -> &PathBuf {
        &self.output
    }

    pub(crate) fn output_delimiter(&self) -> char {
        self.output_delimiter
    }

    pub(crate) fn schema(&self) -> &Vec<Column> {
        &self.schema
    }

    pub(crate) fn select(&self) -> &Vec<String> {
        &self.select
    }

    pub(crate) fn keys(&self) -> &Vec<SortKey> {
        &self.keys
    }

    pub(crate) fn filter(&self) -> &Option<String> {
        &self.filter
    }

    pub(crate) fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub(crate) fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub(crate) fn database(&self) -> &PathBuf {
        &self.database
    }

    pub(crate) fn keep_database(&self) -> bool {
        self.keep_database
    }

    pub(crate) fn executable(&self) -> &PathBuf {
        &self.executable
    }

    pub(crate) fn build_index(&self) -> bool {
        self.build_index
    }

    pub(crate) fn logger(&self) -> &Logger {
        &self.logger
    }

    pub(crate) fn log(&self, line: &str) {
        log::debug!("{}", line);
        (*self.logger)(line);
    }
}

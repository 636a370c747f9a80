use crate::column_type::ColumnType;

/// Declares a column of the source file schema.
///
/// When a schema is supplied it must describe every column of the source file
/// in physical order. The engine reports a mismatch between the declared and
/// the actual column count during import.
///
/// # Examples
/// ```
/// use sqlite_file_sort::column::Column;
/// use sqlite_file_sort::column_type::ColumnType;
/// let column = Column::new("age").with_column_type(ColumnType::Number);
/// ```
#[derive(Clone, Debug)]
pub struct Column {
    name: String,
    column_type: ColumnType,
}

impl Column {
    /// Create a new [Column] with the default type [ColumnType::String]
    pub fn new(name: impl Into<String>) -> Column {
        Column {
            name: name.into(),
            column_type: ColumnType::String,
        }
    }

    /// Get the name for this column.
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Get the [ColumnType] for this column.
    pub fn column_type(&self) -> &ColumnType {
        &self.column_type
    }

    /// Specify the column type. See [ColumnType] for supported types.
    pub fn with_column_type(mut self, column_type: ColumnType) -> Column {
        self.column_type = column_type;
        self
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Column {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Column {
        Column::new(name)
    }
}

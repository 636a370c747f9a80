use crate::order::Order;

/// A sort key - a column name and a direction.
///
/// The order in which keys are added to [crate::sort::Sort] determines the
/// sort precedence - the first key is the primary key, the second breaks
/// ties, and so on.
///
/// # Examples
/// ```
/// use sqlite_file_sort::key::SortKey;
/// use sqlite_file_sort::order::Order;
/// let key = SortKey::new("version").with_order(Order::Desc);
/// ```
#[derive(Clone, Debug)]
pub struct SortKey {
    name: String,
    order: Order,
}

impl SortKey {
    /// Create a new [SortKey] with the default direction [Order::Asc]
    pub fn new(name: impl Into<String>) -> SortKey {
        SortKey {
            name: name.into(),
            order: Order::Asc,
        }
    }

    /// Get the column name for this key.
    pub fn name(&self) -> &String {
        &self.name
    }

    /// Get the [Order] for this key.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Specify the direction for this key.
    pub fn with_order(mut self, order: Order) -> SortKey {
        self.order = order;
        self
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> SortKey {
        SortKey::new(name)
    }
}

impl From<String> for SortKey {
    fn from(name: String) -> SortKey {
        SortKey::new(name)
    }
}

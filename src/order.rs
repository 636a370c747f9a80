/// Sort direction
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

//! The voucher record model.
//!
//! A [`Record`] is one specimen row: an ordered mapping from column name to
//! string value. Lookups of absent columns yield the empty string, which is
//! how every derivation treats "not recorded".

/// One voucher row as ordered `(column, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a header and the cells of one row.
    ///
    /// Short rows are padded with empty values; cells beyond the header are
    /// dropped.
    pub fn from_row(header: &[String], cells: Vec<String>) -> Self {
        let mut cells = cells.into_iter();
        let fields = header
            .iter()
            .map(|column| (column.clone(), cells.next().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Build a record from `(column, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (column, value) in pairs {
            record.set(column, value);
        }
        record
    }

    /// Value of `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Whether the record has a column with this name (empty or not).
    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Set `column` to `value`, appending the column if it is new.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Column names in record order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Project the record onto an output header.
    ///
    /// The result always has exactly `header.len()` cells in header order;
    /// columns the record lacks become `""`.
    pub fn project<'a>(&'a self, header: &[String]) -> Vec<&'a str> {
        header.iter().map(|column| self.get(column)).collect()
    }
}

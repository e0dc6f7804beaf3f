//! Read-only snapshots of catalog metadata.

use serde::{Deserialize, Serialize};

/// Column names reserved for framework bookkeeping, never exposed as
/// user fields.
const RESERVED_COLUMNS: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// One column of a table.
///
/// A snapshot of catalog state at introspection time; sequences of these
/// preserve catalog ordinal position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name.
    pub name: String,
    /// Lowercased catalog data type, e.g. `varchar` or `int4`.
    pub data_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Character maximum length, when declared.
    pub max_length: Option<u32>,
}

impl ColumnMetadata {
    /// Create a non-nullable column without a declared length.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: false,
            max_length: None,
        }
    }

    /// Set the nullable flag.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the character maximum length.
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// A foreign key defined on a table, referencing another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyMetadata {
    /// Column on the owning table.
    pub source_column: String,
    /// Table the key references.
    pub referenced_table: String,
    /// Column the key references.
    pub referenced_column: String,
}

impl ForeignKeyMetadata {
    /// Create a foreign key.
    pub fn new(
        source_column: impl Into<String>,
        referenced_table: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        Self {
            source_column: source_column.into(),
            referenced_table: referenced_table.into(),
            referenced_column: referenced_column.into(),
        }
    }
}

/// A foreign key on another table that references the subject table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingForeignKey {
    /// Table the key is defined on.
    pub source_table: String,
    /// Referencing column on that table.
    pub column: String,
}

/// An index with its catalog-ordered column sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Index name.
    pub index_name: String,
    /// Columns in catalog-defined sequence position.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub is_unique: bool,
}

impl IndexMetadata {
    /// Create an index over the given columns.
    pub fn new(index_name: impl Into<String>, columns: Vec<String>, is_unique: bool) -> Self {
        Self {
            index_name: index_name.into(),
            columns,
            is_unique,
        }
    }

    /// Whether this index covers exactly the given column set.
    ///
    /// Order-insensitive: an index over `(a, b)` covers a query for
    /// `{b, a}`.
    pub fn covers(&self, columns: &[&str]) -> bool {
        if self.columns.len() != columns.len() {
            return false;
        }
        let mut own: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        let mut wanted: Vec<&str> = columns.to_vec();
        own.sort_unstable();
        wanted.sort_unstable();
        own == wanted
    }
}

/// Whether a column name is reserved for framework bookkeeping.
pub fn is_reserved_column(name: &str) -> bool {
    RESERVED_COLUMNS.contains(&name)
}

/// Whether the column set carries a soft-delete marker (`deleted_at`).
pub fn has_soft_deletes(columns: &[ColumnMetadata]) -> bool {
    columns.iter().any(|column| column.name == "deleted_at")
}

/// Whether the column set carries both timestamp columns.
pub fn has_timestamps(columns: &[ColumnMetadata]) -> bool {
    let mut created = false;
    let mut updated = false;
    for column in columns {
        created |= column.name == "created_at";
        updated |= column.name == "updated_at";
    }
    created && updated
}

/// User-assignable column names, in catalog order.
pub fn fillable_fields(columns: &[ColumnMetadata]) -> Vec<String> {
    columns
        .iter()
        .filter(|column| !is_reserved_column(&column.name))
        .map(|column| column.name.clone())
        .collect()
}

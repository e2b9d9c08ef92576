//! Ordered, duplicate-free column name lists for building SQL fragments.
//!
//! A [`ColumnSet`] is derived from a record's field metadata (or built up by
//! hand) and renders the pieces of a parameterized statement:
//!
//! ```text
//! names_string()            first_name, email
//! symbolized_names_string() :first_name, :email
//! updates_string()          first_name = :first_name, email = :email
//! ```
//!
//! Membership is checked with a linear scan. Column lists stay small enough
//! that this beats maintaining a side index.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::{FieldMeta, Record};

/// Bind-parameter marker prepended to a column name.
pub const SYMBOL_PREFIX: char = ':';

/// Separator used by every rendering.
const SEPARATOR: &str = ", ";

/// Ordered set of column names.
///
/// Names keep the order in which they were first seen. Adding a name that is
/// already present is a no-op; removing a name keeps the survivors in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    /// Create an empty column set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the column set declared by record type `R`.
    #[must_use]
    pub fn of<R: Record + ?Sized>() -> Self {
        Self::from_fields(R::fields().iter().copied())
    }

    /// Derive the column set for a record value.
    ///
    /// Accepts the record itself or any indirection to it (`&R`, `Box<R>`,
    /// `Arc<R>`, ...); all of them resolve to the same field list.
    #[must_use]
    pub fn for_record<R: Record + ?Sized>(_record: &R) -> Self {
        Self::of::<R>()
    }

    /// Derive a column set from field metadata in declaration order.
    ///
    /// Skipped fields contribute nothing. Fields resolving to a column that
    /// is already present are merged into the first occurrence.
    #[must_use]
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = FieldMeta<'a>>,
    {
        let mut columns = Self::new();
        for field in fields {
            let Some(name) = field.column_name() else {
                continue;
            };
            if !columns.push(name) {
                debug!(
                    "Field {} maps to column {} which is already present",
                    field.ident, name
                );
            }
        }
        columns
    }

    /// Append each name that is not already present, in argument order.
    pub fn add<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.push(name.as_ref());
        }
        self
    }

    /// Remove each given name that is present. Absent names are ignored.
    pub fn remove<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if let Some(idx) = self.position(name) {
                self.names.remove(idx);
            }
        }
        self
    }

    /// Column names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over column names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is one of the columns.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Names joined with `", "`, e.g. for a select list.
    #[must_use]
    pub fn names_string(&self) -> String {
        self.names.join(SEPARATOR)
    }

    /// Each name prefixed with [`SYMBOL_PREFIX`], in the same order.
    #[must_use]
    pub fn symbolized_names(&self) -> Vec<String> {
        self.iter().map(symbolize).collect()
    }

    /// Symbolized names joined with `", "`, e.g. for a values list.
    #[must_use]
    pub fn symbolized_names_string(&self) -> String {
        self.symbolized_names().join(SEPARATOR)
    }

    /// `name = :name` pairs joined with `", "`, e.g. for an update's set list.
    #[must_use]
    pub fn updates_string(&self) -> String {
        self.iter()
            .map(|name| format!("{} = {}", name, symbolize(name)))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    /// Append `name` if absent. Returns whether it was appended.
    fn push(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }
}

fn symbolize(name: &str) -> String {
    let mut symbol = String::with_capacity(name.len() + 1);
    symbol.push(SYMBOL_PREFIX);
    symbol.push_str(name);
    symbol
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names_string())
    }
}

impl<S: AsRef<str>> FromIterator<S> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut columns = Self::new();
        columns.add(iter);
        columns
    }
}

impl<S: AsRef<str>> Extend<S> for ColumnSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl From<Vec<String>> for ColumnSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<ColumnSet> for Vec<String> {
    fn from(columns: ColumnSet) -> Self {
        columns.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<FieldMeta<'static>> {
        vec![
            FieldMeta::renamed("FirstName", "first_name"),
            FieldMeta::new("LastName"),
            FieldMeta::renamed("Email", "email_address"),
            FieldMeta::skipped("Unwanted"),
        ]
    }

    #[test]
    fn test_new_is_empty() {
        let columns = ColumnSet::new();
        assert!(columns.is_empty());
        assert_eq!(columns.len(), 0);
        assert_eq!(columns.names_string(), "");
        assert_eq!(columns.symbolized_names_string(), "");
        assert_eq!(columns.updates_string(), "");
    }

    #[test]
    fn test_from_fields_resolves_overrides_and_skips() {
        let columns = ColumnSet::from_fields(sample_fields());
        assert_eq!(columns.names(), ["first_name", "LastName", "email_address"]);
    }

    #[test]
    fn test_from_fields_merges_duplicates_globally() {
        let columns = ColumnSet::from_fields([
            FieldMeta::renamed("Created", "ts"),
            FieldMeta::new("Name"),
            FieldMeta::renamed("Updated", "ts"),
            FieldMeta::new("Name"),
        ]);
        assert_eq!(columns.names(), ["ts", "Name"]);
    }

    #[test]
    fn test_from_fields_empty() {
        let columns = ColumnSet::from_fields(std::iter::empty());
        assert!(columns.is_empty());
    }

    #[test]
    fn test_add_appends_in_argument_order() {
        let mut columns = ColumnSet::from_fields(sample_fields());
        columns.add(["b", "a", "first_name"]);
        assert_eq!(
            columns.names(),
            ["first_name", "LastName", "email_address", "b", "a"]
        );
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut columns = ColumnSet::new();
        columns.add(["foo"]).add(["foo"]);
        assert_eq!(columns.names(), ["foo"]);

        columns.add(["bar", "bar"]);
        assert_eq!(columns.names(), ["foo", "bar"]);
    }

    #[test]
    fn test_add_accepts_owned_strings() {
        let mut columns = ColumnSet::new();
        columns.add(vec!["id".to_string(), "name".to_string()]);
        assert_eq!(columns.names_string(), "id, name");
    }

    #[test]
    fn test_remove_keeps_survivor_order() {
        let mut columns: ColumnSet = ["a", "b", "c", "d"].into_iter().collect();
        columns.remove(["c", "a"]);
        assert_eq!(columns.names(), ["b", "d"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut columns: ColumnSet = ["a", "b"].into_iter().collect();
        columns.remove(["z"]);
        assert_eq!(columns.names(), ["a", "b"]);
    }

    #[test]
    fn test_remove_is_exact_match() {
        let mut columns: ColumnSet = ["name", "Name", "name_2"].into_iter().collect();
        columns.remove(["name"]);
        assert_eq!(columns.names(), ["Name", "name_2"]);
    }

    #[test]
    fn test_renderings() {
        let columns = ColumnSet::from_fields(sample_fields());
        assert_eq!(
            columns.names_string(),
            "first_name, LastName, email_address"
        );
        assert_eq!(
            columns.symbolized_names(),
            [":first_name", ":LastName", ":email_address"]
        );
        assert_eq!(
            columns.symbolized_names_string(),
            ":first_name, :LastName, :email_address"
        );
        assert_eq!(
            columns.updates_string(),
            "first_name = :first_name, LastName = :LastName, email_address = :email_address"
        );
    }

    #[test]
    fn test_single_column_has_no_separator() {
        let columns: ColumnSet = ["id"].into_iter().collect();
        assert_eq!(columns.names_string(), "id");
        assert_eq!(columns.updates_string(), "id = :id");
    }

    #[test]
    fn test_display_matches_names_string() {
        let columns: ColumnSet = ["a", "b"].into_iter().collect();
        assert_eq!(columns.to_string(), "a, b");
    }

    #[test]
    fn test_extend_skips_duplicates() {
        let mut columns: ColumnSet = ["a"].into_iter().collect();
        columns.extend(["a", "b"]);
        assert_eq!(Vec::from(columns), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_serializes_as_name_list() {
        let columns: ColumnSet = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&columns).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let columns: ColumnSet = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(columns.names(), ["a", "b"]);
    }
}

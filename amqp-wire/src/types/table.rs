use super::FieldValue;

/// Represent a named table entry
///
/// An entry without a value is skipped when the table is written
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The key of the entry, at most 255 bytes once encoded
    pub name: String,

    /// The value of the entry
    pub value: Option<FieldValue>,
}

impl Entry {
    /// Create a new Entry
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a new Entry with no value
    #[inline]
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Get the name of this entry
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the value of this entry
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }
}

/// An ordered table of short string keys to field values
///
/// Order is preserved through encoding and decoding. Decoded tables never contain duplicate keys,
/// the first occurrence on the wire wins.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldTable {
    entries: Vec<Entry>,
}

impl FieldTable {
    /// Create an empty table
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing the first entry with the same name
    ///
    /// Returns the previous value
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.insert_entry(Entry::new(name, value))
    }

    /// Set `name` to have no value, it will be skipped on the wire
    pub fn insert_absent(&mut self, name: impl Into<String>) -> Option<FieldValue> {
        self.insert_entry(Entry::absent(name))
    }

    fn insert_entry(&mut self, entry: Entry) -> Option<FieldValue> {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => std::mem::replace(existing, entry).value,
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Append an entry without checking for an existing entry of the same name
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Get the value of the first entry called `name`
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(Entry::value)
    }

    /// Check if an entry called `name` exists, with or without a value
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Remove the first entry called `name`, returning its value
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.entries.iter().position(|e| e.name == name)?;
        self.entries.remove(index).value
    }

    /// The number of entries, including entries without a value
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries that have a value, in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries
            .iter()
            .filter_map(|e| e.value.as_ref().map(|v| (e.name.as_str(), v)))
    }

    /// All entries, in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = FieldTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

impl<K: Into<String>, V: Into<FieldValue>, const N: usize> From<[(K, V); N]> for FieldTable {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::{Entry, FieldTable};
    use crate::types::FieldValue;

    #[test]
    fn test_insert_replaces_first() {
        let mut table = FieldTable::new();
        assert_eq!(table.insert("a", 1i32), None);
        assert_eq!(table.insert("b", true), None);
        assert_eq!(table.insert("a", 2i32), Some(FieldValue::LongInt(1)));
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], Entry::new("a", 2i32));
    }

    #[test]
    fn test_get_first_wins() {
        let mut table = FieldTable::new();
        table.push(Entry::new("a", "first"));
        table.push(Entry::new("a", "second"));
        assert_eq!(table.get("a").and_then(FieldValue::as_str), Some("first"));
    }

    #[test]
    fn test_absent_entries() {
        let mut table = FieldTable::from([("kept", 1i32)]);
        table.insert_absent("skipped");
        assert_eq!(table.len(), 2);
        assert!(table.contains_key("skipped"));
        assert_eq!(table.get("skipped"), None);
        assert_eq!(table.iter().count(), 1);
        assert_eq!(table.remove("kept"), Some(FieldValue::LongInt(1)));
        assert_eq!(table.len(), 1);
    }
}

use crate::Value;
use indexmap::IndexMap;

/// Top-level keys of the remote store, in the order the store returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    entries: IndexMap<String, Value>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Replace the value under `key`, keeping its position when it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Result of a whole-tree read.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Exists(Tree),
    /// The store root holds no data.
    Empty,
}

impl Snapshot {
    pub fn into_tree(self) -> Option<Tree> {
        match self {
            Snapshot::Exists(tree) => Some(tree),
            Snapshot::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut tree: Tree = [("a", Value::from("1")), ("b", Value::from("2"))]
            .into_iter()
            .collect();

        tree.insert("a", Value::from("3"));

        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(tree.get("a"), Some(&Value::from("3")));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn empty_snapshot_has_no_tree() {
        assert_eq!(Snapshot::Empty.into_tree(), None);
        assert_eq!(
            Snapshot::Exists(Tree::new()).into_tree(),
            Some(Tree::default())
        );
    }
}

use std::{borrow::Borrow, fmt, sync::Arc};

/// A named location in the road network.
///
/// The name is the identity: two towns are equal, ordered and hashed by their
/// names only. A town carries no adjacency or search state, the
/// [`Graph`](super::Graph) tracks neighbors and every shortest path run keeps
/// its own distances, so cloning a town is a cheap copy of its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Town {
    name: Arc<str>,
}

impl Town {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the town has an empty name.
    ///
    /// Empty towns are never added to a graph and graph operations that need
    /// an identity reject them with [`Error::EmptyTown`](super::Error::EmptyTown).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Hash of `Arc<str>` is the hash of the `str`, so lookups by name are
// consistent with lookups by town.
impl Borrow<str> for Town {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Town {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Town {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use super::*;

    #[test]
    fn identity_is_name() {
        assert_eq!(Town::new("Rockville"), Town::from(String::from("Rockville")));
        assert_ne!(Town::new("Rockville"), Town::new("Bethesda"));
    }

    #[test]
    fn same_name_is_one_set_member() {
        let towns: HashSet<_> = [Town::new("A"), Town::new("B"), Town::new("A")]
            .into_iter()
            .collect();

        assert_eq!(towns.len(), 2);
        assert!(towns.contains("A"));
        assert!(!towns.contains("C"));
    }

    #[test]
    fn ordered_by_name() {
        let towns: BTreeSet<_> = ["Gaithersburg", "Annapolis", "Columbia"]
            .into_iter()
            .map(Town::new)
            .collect();

        let names = towns.iter().map(Town::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Annapolis", "Columbia", "Gaithersburg"]);
    }

    #[test]
    fn clone_is_independent_value() {
        let town = Town::new("Frederick");
        let copy = town.clone();

        assert_eq!(town, copy);
        assert_eq!(copy.to_string(), "Frederick");
    }

    #[test]
    fn empty() {
        assert!(Town::new("").is_empty());
        assert!(!Town::new(" ").is_empty());
    }
}

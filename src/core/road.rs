use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::Town;

/// A named, weighted, undirected connection between two towns.
///
/// Roads are equal if they connect the same pair of towns, in either order.
/// Weight and name do not take part in equality. Listings order roads by name,
/// see [`Road::cmp_by_name`].
#[derive(Debug, Clone)]
pub struct Road {
    source: Town,
    destination: Town,
    weight: u32,
    name: String,
}

impl Road {
    pub fn new(source: Town, destination: Town, weight: u32, name: impl Into<String>) -> Self {
        Self {
            source,
            destination,
            weight,
            name: name.into(),
        }
    }

    /// Creates a road of weight 1.
    pub fn with_unit_weight(source: Town, destination: Town, name: impl Into<String>) -> Self {
        Self::new(source, destination, 1, name)
    }

    pub fn source(&self) -> &Town {
        &self.source
    }

    pub fn destination(&self) -> &Town {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the town is either endpoint of the road.
    pub fn contains(&self, town: &Town) -> bool {
        &self.source == town || &self.destination == town
    }

    /// Returns the endpoint opposite to `town`, or `None` if the road does
    /// not touch `town`.
    pub fn opposite(&self, town: &Town) -> Option<&Town> {
        if &self.source == town {
            Some(&self.destination)
        } else if &self.destination == town {
            Some(&self.source)
        } else {
            None
        }
    }

    pub(crate) fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.source, &self.destination)
    }

    /// Compares two roads lexicographically by name.
    ///
    /// This is not an [`Ord`] implementation, because two roads with
    /// different names can still be equal.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} connects {} and {} {} mi",
            self.name, self.source, self.destination, self.weight
        )
    }
}

/// Unordered pair of towns, the key of a road.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Endpoints(Town, Town);

impl Endpoints {
    pub fn new(a: &Town, b: &Town) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }
}

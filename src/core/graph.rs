use std::collections::hash_map::Entry;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::algo::{Route, ShortestPaths};

use super::{road::Endpoints, Error, Road, Town};

/// Undirected road network.
///
/// Every road is indexed by its unordered pair of endpoints, so there is at
/// most one road between two towns. Adding or removing a road updates the
/// neighbor sets of both endpoints, and removing a town removes all roads
/// incident to it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    neighbors: FxHashMap<Town, FxHashSet<Town>>,
    roads: FxHashMap<Endpoints, Road>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn town_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Adds a town to the graph.
    ///
    /// Returns `false` if a town of the same name is already present or if the
    /// town has an empty name.
    pub fn add_town(&mut self, town: Town) -> bool {
        if town.is_empty() {
            return false;
        }

        match self.neighbors.entry(town) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                debug!(town = %slot.key(), "add town");
                slot.insert(FxHashSet::default());
                true
            }
        }
    }

    /// Removes a town together with every road incident to it.
    ///
    /// Returns `false` if the town is not in the graph.
    pub fn remove_town(&mut self, town: &Town) -> bool {
        let Some(adjacent) = self.neighbors.remove(town) else {
            return false;
        };

        for other in adjacent {
            self.roads.remove(&Endpoints::new(town, &other));

            if let Some(neighbors) = self.neighbors.get_mut(&other) {
                neighbors.remove(town);
            }
        }

        debug!(%town, "remove town");
        true
    }

    pub fn contains_town(&self, town: &Town) -> bool {
        self.neighbors.contains_key(town)
    }

    /// Returns the stored town of the given name.
    pub fn town(&self, name: &str) -> Option<&Town> {
        self.neighbors.get_key_value(name).map(|(town, _)| town)
    }

    /// Iterates over all towns, in no particular order.
    pub fn towns(&self) -> impl Iterator<Item = &Town> + '_ {
        self.neighbors.keys()
    }

    /// Iterates over the towns connected to `town` by exactly one road.
    ///
    /// Yields nothing if `town` is not in the graph.
    pub fn neighbors<'a>(&'a self, town: &Town) -> impl Iterator<Item = &'a Town> + 'a {
        self.neighbors.get(town).into_iter().flatten()
    }

    pub fn are_neighbors(&self, a: &Town, b: &Town) -> bool {
        self.neighbors
            .get(a)
            .map_or(false, |neighbors| neighbors.contains(b))
    }

    /// Connects two towns present in the graph by a road and returns it.
    ///
    /// Fails with [`Error::EmptyTown`] or [`Error::TownAbsent`] if any of the
    /// towns is unusable, and with [`Error::MultiRoad`] if the towns are
    /// already connected.
    pub fn add_road(
        &mut self,
        source: &Town,
        destination: &Town,
        weight: u32,
        name: impl Into<String>,
    ) -> Result<&Road, Error> {
        self.check_town(source)?;
        self.check_town(destination)?;

        let road = Road::new(source.clone(), destination.clone(), weight, name);

        let slot = match self.roads.entry(road.endpoints()) {
            Entry::Occupied(_) => {
                return Err(Error::MultiRoad {
                    first: source.clone(),
                    second: destination.clone(),
                })
            }
            Entry::Vacant(slot) => slot,
        };

        debug!(%source, %destination, weight, name = road.name(), "add road");

        // Both towns were checked above.
        if let Some(neighbors) = self.neighbors.get_mut(source) {
            neighbors.insert(destination.clone());
        }
        if let Some(neighbors) = self.neighbors.get_mut(destination) {
            neighbors.insert(source.clone());
        }

        Ok(slot.insert(road))
    }

    /// Removes the road between two towns and returns it, or `None` if the
    /// towns are not connected.
    ///
    /// Only the pair of towns identifies the road. The towns stop being
    /// neighbors of each other in any case.
    pub fn remove_road(&mut self, source: &Town, destination: &Town) -> Option<Road> {
        let road = self.roads.remove(&Endpoints::new(source, destination));

        if let Some(neighbors) = self.neighbors.get_mut(source) {
            neighbors.remove(destination);
        }
        if let Some(neighbors) = self.neighbors.get_mut(destination) {
            neighbors.remove(source);
        }

        if let Some(road) = road.as_ref() {
            debug!(%source, %destination, name = road.name(), "remove road");
        }

        road
    }

    /// Returns the road between two towns, `Ok(None)` if they are not
    /// connected.
    ///
    /// Fails if any of the towns is empty or not in the graph.
    pub fn road(&self, source: &Town, destination: &Town) -> Result<Option<&Road>, Error> {
        self.check_town(source)?;
        self.check_town(destination)?;
        Ok(self.road_between(source, destination))
    }

    pub fn contains_road(&self, source: &Town, destination: &Town) -> Result<bool, Error> {
        self.road(source, destination).map(|road| road.is_some())
    }

    /// Returns all roads incident to `town`, ordered by name.
    ///
    /// A town that is not in the graph has no roads. Fails only if the town is
    /// empty.
    pub fn roads_of(&self, town: &Town) -> Result<Vec<&Road>, Error> {
        if town.is_empty() {
            return Err(Error::EmptyTown);
        }

        let mut roads = self
            .neighbors(town)
            .filter_map(|other| self.road_between(town, other))
            .collect::<Vec<_>>();
        roads.sort_by(|lhs, rhs| lhs.cmp_by_name(rhs));

        Ok(roads)
    }

    /// Iterates over all roads, in no particular order.
    pub fn roads(&self) -> impl Iterator<Item = &Road> + '_ {
        self.roads.values()
    }

    /// Finds the shortest route from `source` to `destination`.
    ///
    /// An unreachable destination is not an error, it is reported as
    /// [`Route::Unreachable`]. The search keeps its state local, so the graph
    /// can be shared by concurrent readers.
    pub fn shortest_path(&self, source: &Town, destination: &Town) -> Result<Route, Error> {
        self.check_town(destination)?;

        let paths = ShortestPaths::on(self)
            .goal(destination.clone())
            .run(source.clone())?;
        let route = paths.route(destination)?;

        trace!(%source, %destination, reachable = route.is_reachable(), "shortest path");
        Ok(route)
    }

    pub(crate) fn road_between(&self, a: &Town, b: &Town) -> Option<&Road> {
        self.roads.get(&Endpoints::new(a, b))
    }

    pub(crate) fn check_town(&self, town: &Town) -> Result<(), Error> {
        if town.is_empty() {
            Err(Error::EmptyTown)
        } else if !self.contains_town(town) {
            Err(Error::TownAbsent(town.clone()))
        } else {
            Ok(())
        }
    }
}

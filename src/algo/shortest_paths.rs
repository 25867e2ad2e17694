//! Find the shortest route between towns of a road network.
//!
//! Dijkstra's algorithm settles towns one by one in the order of their
//! distance from the source. Among towns of equal distance, the one with the
//! lexicographically smaller name is settled first, so the result does not
//! depend on hashing order. A predecessor is only replaced by a strictly
//! shorter route, so among equally long routes the one leading through the
//! town settled earlier wins.
//!
//! # Examples
//!
//! ```
//! use towngraph::{algo::ShortestPaths, core::{Graph, Town}};
//!
//! let mut graph = Graph::new();
//!
//! let names = ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg"];
//! for name in names {
//!     graph.add_town(Town::new(name));
//! }
//!
//! let [prague, bratislava, vienna, munich, nuremberg] = names.map(Town::new);
//!
//! graph.add_road(&prague, &bratislava, 328, "D1").unwrap();
//! graph.add_road(&prague, &nuremberg, 297, "D5").unwrap();
//! graph.add_road(&prague, &vienna, 293, "E59").unwrap();
//! graph.add_road(&bratislava, &vienna, 79, "A6").unwrap();
//! graph.add_road(&nuremberg, &munich, 170, "A9").unwrap();
//! graph.add_road(&vienna, &munich, 402, "A1").unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal(munich.clone()).run(prague).unwrap();
//! let route = shortest_paths.route(&munich).unwrap();
//!
//! assert_eq!(route.distance(), Some(467));
//! assert_eq!(
//!     route.to_lines(),
//!     vec!["Prague via D5 to Nuremberg 297 mi", "Nuremberg via A9 to Munich 170 mi"]
//! );
//! ```

use std::{borrow::Borrow, fmt};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Error, Graph, Road, Town};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest routes and their distances from a single source town.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<'a> {
    graph: &'a Graph,
    source: Town,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal.
    dist: FxHashMap<Town, u64>,
    pred: FxHashMap<Town, Town>,
    // Distances of discovered towns outside of this set are only tentative.
    settled: FxHashSet<Town>,
}

impl<'a> ShortestPaths<'a> {
    /// Source town where the search was started.
    pub fn source(&self) -> &Town {
        &self.source
    }

    /// Returns the route distance between the source town and the given town,
    /// or `None` if it's not known.
    ///
    /// There are two causes why the distance is not known: (1) the towns are
    /// not connected, or (2) the [goal](ShortestPathsBuilder::goal) was reached
    /// before settling the given town.
    pub fn dist<T>(&self, to: T) -> Option<u64>
    where
        T: Borrow<Town>,
    {
        let to = to.borrow();
        if !self.is_settled(to) {
            return None;
        }

        self.dist.get(to).copied()
    }

    /// Returns the town preceding `to` on its shortest route, or `None` for
    /// the source and for towns with unknown distance.
    pub fn pred<T>(&self, to: T) -> Option<&Town>
    where
        T: Borrow<Town>,
    {
        let to = to.borrow();
        if !self.is_settled(to) {
            return None;
        }

        self.pred.get(to)
    }

    /// Returns `true` if the shortest distance to the town is final.
    pub fn is_settled(&self, town: &Town) -> bool {
        self.settled.contains(town)
    }

    /// Returns an iterator over towns on the route between the given town
    /// and the source town, in this order, excluding the given town.
    ///
    /// Yields nothing if the distance to the given town is not known.
    pub fn reconstruct(&self, to: Town) -> PathReconstruction<'_> {
        let remaining = if self.is_settled(&to) {
            self.pred.len()
        } else {
            0
        };

        PathReconstruction {
            curr: to,
            pred: &self.pred,
            remaining,
        }
    }

    /// Builds the route from the source town to `to`.
    ///
    /// The predecessor chain is walked backwards from `to`. If it breaks
    /// before reaching the source, the town is unreachable. As with
    /// [`dist`](Self::dist), a town the search stopped before settling is
    /// reported as [`Route::Unreachable`], even if a longer route to it was
    /// already discovered.
    pub fn route(&self, to: &Town) -> Result<Route, Error> {
        let Some(distance) = self.dist(to) else {
            return Ok(Route::Unreachable);
        };

        let mut hops = Vec::new();
        let mut curr = to;

        while curr != &self.source {
            // Every step must take a new predecessor, so a longer chain means
            // a cycle.
            if hops.len() >= self.pred.len() {
                return Ok(Route::Unreachable);
            }

            let Some(prev) = self.pred.get(curr) else {
                return Ok(Route::Unreachable);
            };

            let road = self
                .graph
                .road_between(prev, curr)
                .ok_or_else(|| Error::RoadNotAvailable {
                    first: prev.clone(),
                    second: curr.clone(),
                })?;

            hops.push(Hop::new(prev.clone(), road, curr.clone()));
            curr = prev;
        }

        hops.reverse();
        Ok(Route::Reachable { hops, distance })
    }
}

/// One road segment of a route, traveled in a specific direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: Town,
    pub to: Town,
    pub road: String,
    pub weight: u32,
}

impl Hop {
    fn new(from: Town, road: &Road, to: Town) -> Self {
        Self {
            from,
            to,
            road: road.name().to_owned(),
            weight: road.weight(),
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.from, self.road, self.to, self.weight
        )
    }
}

/// Result of a search between two towns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The destination is reachable. Hops are ordered from the source to the
    /// destination and are empty if these are the same town.
    Reachable { hops: Vec<Hop>, distance: u64 },

    /// No sequence of roads connects the towns, or the search stopped at its
    /// goal before settling the destination.
    Unreachable,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Route::Reachable { .. })
    }

    /// Returns the hops of the route, empty if unreachable.
    pub fn hops(&self) -> &[Hop] {
        match self {
            Route::Reachable { hops, .. } => hops,
            Route::Unreachable => &[],
        }
    }

    pub fn distance(&self) -> Option<u64> {
        match self {
            Route::Reachable { distance, .. } => Some(*distance),
            Route::Unreachable => None,
        }
    }

    /// Renders every hop as `"<from> via <road> to <to> <weight> mi"`.
    pub fn to_lines(&self) -> Vec<String> {
        self.hops().iter().map(Hop::to_string).collect()
    }
}

/// Iterator over the towns on the route from a town to the source town.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: Town,
    pred: &'a FxHashMap<Town, Town>,
    remaining: usize,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = Town;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

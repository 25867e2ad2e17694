//! Name-keyed access to a road network.
//!
//! [`Atlas`] wraps a [`Graph`] and takes town names instead of [`Town`]
//! values. Operations that fail on the graph level are reported as `false`,
//! `None` or an empty list here, which is convenient for interactive use.

use tracing::debug;

use crate::{
    algo::Route,
    core::{Error, Graph, Road, Town},
};

#[derive(Debug, Clone, Default)]
pub struct Atlas {
    graph: Graph,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Returns `true` if the town was added, `false` if it already exists or
    /// the name is empty.
    pub fn add_town(&mut self, name: &str) -> bool {
        self.graph.add_town(Town::new(name))
    }

    pub fn contains_town(&self, name: &str) -> bool {
        self.graph.town(name).is_some()
    }

    pub fn town(&self, name: &str) -> Option<&Town> {
        self.graph.town(name)
    }

    /// Connects two existing towns by a road.
    ///
    /// Returns `false` if any of the towns does not exist or if they are
    /// already connected.
    pub fn add_road(&mut self, town1: &str, town2: &str, weight: u32, road_name: &str) -> bool {
        let (src, dst) = (Town::new(town1), Town::new(town2));

        match self.graph.add_road(&src, &dst, weight, road_name) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, road = road_name, "road not added");
                false
            }
        }
    }

    /// Returns the name of the road connecting the towns.
    pub fn road(&self, town1: &str, town2: &str) -> Option<&str> {
        let (src, dst) = (Town::new(town1), Town::new(town2));

        self.graph
            .road(&src, &dst)
            .ok()
            .flatten()
            .map(Road::name)
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        self.road(town1, town2).is_some()
    }

    /// Removes the road between two towns.
    ///
    /// Only the towns identify the road, `road_name` is used for logging.
    /// Returns `false` if the towns were not connected.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road_name: &str) -> bool {
        let (src, dst) = (Town::new(town1), Town::new(town2));

        match self.graph.remove_road(&src, &dst) {
            Some(road) => {
                if road.name() != road_name {
                    debug!(requested = road_name, removed = road.name(), "removed road by towns");
                }
                true
            }
            None => false,
        }
    }

    /// Removes the town and all roads leading to it.
    pub fn delete_town(&mut self, name: &str) -> bool {
        self.graph.remove_town(&Town::new(name))
    }

    /// Names of all towns, sorted.
    pub fn all_towns(&self) -> Vec<String> {
        let mut towns = self
            .graph
            .towns()
            .map(|town| town.name().to_owned())
            .collect::<Vec<_>>();
        towns.sort_unstable();
        towns
    }

    /// Names of all roads, sorted and without duplicates.
    pub fn all_roads(&self) -> Vec<String> {
        let mut roads = self
            .graph
            .roads()
            .map(|road| road.name().to_owned())
            .collect::<Vec<_>>();
        roads.sort_unstable();
        roads.dedup();
        roads
    }

    /// Returns the shortest route between two towns as rendered hops.
    ///
    /// The list is empty if the destination is unreachable, if any of the
    /// towns is unknown, or if both towns are the same. Use [`Atlas::route`]
    /// to tell these apart.
    pub fn path(&self, town1: &str, town2: &str) -> Vec<String> {
        match self.route(town1, town2) {
            Ok(route) => route.to_lines(),
            Err(error) => {
                debug!(%error, "no path");
                Vec::new()
            }
        }
    }

    pub fn route(&self, town1: &str, town2: &str) -> Result<Route, Error> {
        self.graph
            .shortest_path(&Town::new(town1), &Town::new(town2))
    }
}

impl From<Graph> for Atlas {
    fn from(graph: Graph) -> Self {
        Self { graph }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn create_atlas() -> Atlas {
        let mut atlas = Atlas::new();

        for name in ["Town_1", "Town_2", "Town_3", "Town_4", "Town_5"] {
            atlas.add_town(name);
        }

        atlas.add_road("Town_1", "Town_2", 2, "Road_1");
        atlas.add_road("Town_1", "Town_3", 4, "Road_2");
        atlas.add_road("Town_2", "Town_3", 1, "Road_3");
        atlas.add_road("Town_3", "Town_4", 5, "Road_4");

        atlas
    }

    #[test]
    fn add_town() {
        let mut atlas = create_atlas();

        assert!(!atlas.add_town("Town_1"));
        assert!(atlas.add_town("Town_6"));
        assert!(!atlas.add_town(""));
        assert!(atlas.contains_town("Town_6"));
        assert_eq!(atlas.town("Town_6"), Some(&Town::new("Town_6")));
    }

    #[test]
    fn add_road() {
        let mut atlas = create_atlas();

        assert!(atlas.add_road("Town_4", "Town_5", 3, "Road_5"));
        assert!(!atlas.add_road("Town_4", "Town_5", 3, "Road_6"));
        assert!(!atlas.add_road("Town_4", "Nowhere", 3, "Road_7"));
        assert!(atlas.contains_road_connection("Town_5", "Town_4"));
    }

    #[test]
    fn road() {
        let atlas = create_atlas();

        assert_eq!(atlas.road("Town_3", "Town_2"), Some("Road_3"));
        assert_eq!(atlas.road("Town_1", "Town_4"), None);
        assert_eq!(atlas.road("Town_1", "Nowhere"), None);
    }

    #[test]
    fn all_towns_sorted() {
        let mut atlas = create_atlas();
        atlas.add_town("Annapolis");

        assert_eq!(
            atlas.all_towns(),
            vec!["Annapolis", "Town_1", "Town_2", "Town_3", "Town_4", "Town_5"]
        );
    }

    #[test]
    fn all_roads_sorted() {
        let mut atlas = create_atlas();
        atlas.add_road("Town_4", "Town_5", 1, "Road_2");

        assert_eq!(
            atlas.all_roads(),
            vec!["Road_1", "Road_2", "Road_3", "Road_4"]
        );
    }

    #[test]
    fn delete_road_connection() {
        let mut atlas = create_atlas();

        assert!(atlas.delete_road_connection("Town_2", "Town_1", "Road_1"));
        assert!(!atlas.delete_road_connection("Town_2", "Town_1", "Road_1"));
        assert!(!atlas.contains_road_connection("Town_1", "Town_2"));
        assert_eq!(atlas.all_roads(), vec!["Road_2", "Road_3", "Road_4"]);
    }

    #[test]
    fn delete_town() {
        let mut atlas = create_atlas();

        assert!(atlas.delete_town("Town_3"));
        assert!(!atlas.delete_town("Town_3"));
        assert!(!atlas.contains_town("Town_3"));
        assert_eq!(atlas.all_roads(), vec!["Road_1"]);
    }

    #[test]
    fn path() {
        let atlas = create_atlas();

        assert_eq!(
            atlas.path("Town_1", "Town_4"),
            vec![
                "Town_1 via Road_1 to Town_2 2 mi",
                "Town_2 via Road_3 to Town_3 1 mi",
                "Town_3 via Road_4 to Town_4 5 mi",
            ]
        );
    }

    #[test]
    fn path_unreachable() {
        let atlas = create_atlas();

        assert!(atlas.path("Town_1", "Town_5").is_empty());
        assert!(atlas.path("Town_1", "Nowhere").is_empty());
        assert_eq!(atlas.route("Town_1", "Town_5"), Ok(Route::Unreachable));
        assert_matches!(atlas.route("Town_1", "Nowhere"), Err(Error::TownAbsent(_)));
    }

    #[test]
    fn from_graph() {
        let atlas = Atlas::from(create_atlas().into_graph());
        assert_eq!(atlas.graph().road_count(), 4);
    }
}

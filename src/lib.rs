//! Road network of named towns connected by undirected, weighted roads.
//!
//! The [`Graph`](core::Graph) owns towns and roads and keeps the neighbor sets
//! of both endpoints in sync with every road. Shortest routes are found with
//! Dijkstra's algorithm, see [`algo::shortest_paths`].
//!
//! ```
//! use towngraph::core::{Graph, Town};
//!
//! let mut graph = Graph::new();
//!
//! let a = Town::new("A");
//! let b = Town::new("B");
//! let c = Town::new("C");
//!
//! for town in [&a, &b, &c] {
//!     graph.add_town(town.clone());
//! }
//!
//! graph.add_road(&a, &b, 5, "R1").unwrap();
//! graph.add_road(&b, &c, 3, "R2").unwrap();
//!
//! let route = graph.shortest_path(&a, &c).unwrap();
//! assert_eq!(route.distance(), Some(8));
//! assert_eq!(
//!     route.to_lines(),
//!     vec!["A via R1 to B 5 mi", "B via R2 to C 3 mi"]
//! );
//! ```

pub mod algo;
pub mod atlas;
pub mod core;
pub mod infra;
pub mod loader;

pub use crate::atlas::Atlas;
pub use crate::core::{Graph, Road, Town};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::{Hop, Route, ShortestPaths},
        atlas::Atlas,
        core::{Error, Graph, Road, Town},
    };
}

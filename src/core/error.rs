use thiserror::Error;

use super::Town;

/// The error encountered by a structural graph operation.
///
/// Lookups that simply find nothing are not errors; they return `None` or an
/// unreachable [`Route`](crate::algo::Route).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A town argument has an empty name, which stands for no town at all.
    #[error("town reference is empty")]
    EmptyTown,

    /// A town argument is not a vertex of the graph.
    #[error("town `{0}` is not in the graph")]
    TownAbsent(Town),

    /// A road between the two towns already exists.
    #[error("towns `{first}` and `{second}` are already connected by a road")]
    MultiRoad { first: Town, second: Town },

    /// A neighbor without the road connecting it.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates that the neighbor sets went out of sync with the roads.
    #[error("road between `{first}` and `{second}` not available")]
    RoadNotAvailable { first: Town, second: Town },
}

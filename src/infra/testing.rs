use thiserror::Error;

use crate::core::{Graph, Town};

/// Creates a path `names[0] - names[1] - ...` with all roads of the same
/// weight. Road `i` is named `"R{i}"`.
pub fn create_path(names: &[&str], weight: u32) -> Graph {
    let mut graph = Graph::new();

    for name in names {
        graph.add_town(Town::new(*name));
    }

    for (i, pair) in names.windows(2).enumerate() {
        let (src, dst) = (Town::new(pair[0]), Town::new(pair[1]));
        // Consecutive duplicates would make a second road between the same
        // towns, just skip them.
        let _ = graph.add_road(&src, &dst, weight, format!("R{i}"));
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("road {0} has endpoint `{1}` which is not in the graph")]
    RoadEndpointAbsent(String, Town),
    #[error("road {0} connects `{1}` and `{2}`, but they are not neighbors")]
    NeighborMissing(String, Town, Town),
    #[error("towns `{0}` and `{1}` are neighbors, but there is no road between them")]
    RoadMissing(Town, Town),
    #[error("neighbor `{1}` of town `{0}` is not in the graph")]
    NeighborAbsent(Town, Town),
    #[error("sum of degrees with loops counted once more ({0}) is not equal to doubled road count ({1})")]
    HandshakingLemma(usize, usize),
}

/// Checks that the neighbor sets and the roads describe the same network.
pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    let mut loops = 0;

    for road in graph.roads() {
        for endpoint in [road.source(), road.destination()] {
            if !graph.contains_town(endpoint) {
                return Err(ConsistencyCheckError::RoadEndpointAbsent(
                    road.name().to_owned(),
                    endpoint.clone(),
                ));
            }
        }

        if !graph.are_neighbors(road.source(), road.destination())
            || !graph.are_neighbors(road.destination(), road.source())
        {
            return Err(ConsistencyCheckError::NeighborMissing(
                road.name().to_owned(),
                road.source().clone(),
                road.destination().clone(),
            ));
        }

        if road.source() == road.destination() {
            loops += 1;
        }
    }

    let mut degree_sum = 0;

    for town in graph.towns() {
        for neighbor in graph.neighbors(town) {
            if !graph.contains_town(neighbor) {
                return Err(ConsistencyCheckError::NeighborAbsent(
                    town.clone(),
                    neighbor.clone(),
                ));
            }

            if graph.road_between(town, neighbor).is_none() {
                return Err(ConsistencyCheckError::RoadMissing(
                    town.clone(),
                    neighbor.clone(),
                ));
            }

            degree_sum += 1;
        }
    }

    // A loop is a single member of its town's neighbor set.
    if degree_sum + loops != 2 * graph.road_count() {
        return Err(ConsistencyCheckError::HandshakingLemma(
            degree_sum + loops,
            2 * graph.road_count(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_consistent() {
        let graph = create_path(&["A", "B", "C"], 1);

        assert_eq!(graph.road_count(), 2);
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn path_repeated_name() {
        let graph = create_path(&["A", "B", "A", "B"], 1);

        assert_eq!(graph.town_count(), 2);
        assert_eq!(graph.road_count(), 1);
        assert_eq!(check_consistency(&graph), Ok(()));
    }
}

use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashSet},
    hash::BuildHasherDefault,
};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::core::{Error, Graph, Town};

use super::ShortestPaths;

pub fn dijkstra(
    graph: &Graph,
    source: Town,
    goal: Option<Town>,
) -> Result<ShortestPaths<'_>, Error> {
    let mut settled: FxHashSet<Town> =
        HashSet::with_capacity_and_hasher(graph.town_count(), BuildHasherDefault::default());

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    // Ordered by distance first and town name second, which makes the choice
    // between equally distant towns deterministic.
    let mut frontier = BinaryHeap::new();

    dist.insert(source.clone(), 0u64);
    frontier.push(Reverse((0u64, source.clone())));

    while let Some(Reverse((town_dist, town))) = frontier.pop() {
        // This can happen due to duplication of towns when doing relaxation.
        if settled.contains(&town) {
            continue;
        }

        trace!(%town, dist = town_dist, "settle");

        if goal.as_ref() == Some(&town) {
            settled.insert(town);
            break;
        }

        for next in graph.neighbors(&town) {
            if settled.contains(next) {
                continue;
            }

            let road = graph
                .road_between(&town, next)
                .ok_or_else(|| Error::RoadNotAvailable {
                    first: town.clone(),
                    second: next.clone(),
                })?;

            let next_dist = town_dist + u64::from(road.weight());

            match dist.entry(next.clone()) {
                Entry::Occupied(mut curr_dist) => {
                    // Relaxation operation. If the distance is better than what
                    // we had so far, update it.
                    if next_dist < *curr_dist.get() {
                        *curr_dist.get_mut() = next_dist;
                        // Stale entries stay in the queue and are skipped once
                        // popped, because the town is settled by then.
                        frontier.push(Reverse((next_dist, next.clone())));
                        pred.insert(next.clone(), town.clone());
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist);
                    frontier.push(Reverse((next_dist, next.clone())));
                    pred.insert(next.clone(), town.clone());
                }
            }
        }

        settled.insert(town);
    }

    Ok(ShortestPaths {
        graph,
        source,
        dist,
        pred,
        settled,
    })
}

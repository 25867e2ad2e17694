use proptest::{collection::vec, prelude::*};

use crate::core::{Graph, Town};

/// Generates road networks of up to `max_towns` towns named `t0`, `t1`, ...
/// and up to `max_roads` roads of weight below 100.
///
/// Road candidates that would connect already connected towns are dropped, so
/// the actual road count can be lower. Loops can occur.
pub fn road_network(max_towns: usize, max_roads: usize) -> impl Strategy<Value = Graph> {
    (1..=max_towns.max(1))
        .prop_flat_map(move |n| {
            let road = (0..n, 0..n, 0u32..100);
            (Just(n), vec(road, 0..=max_roads))
        })
        .prop_map(|(n, roads)| {
            let towns = (0..n).map(|i| Town::new(format!("t{i}"))).collect::<Vec<_>>();

            let mut graph = Graph::new();
            for town in &towns {
                graph.add_town(town.clone());
            }

            for (i, (src, dst, weight)) in roads.into_iter().enumerate() {
                let _ = graph.add_road(&towns[src], &towns[dst], weight, format!("r{i}"));
            }

            graph
        })
}

/// Generates a loader record `road;weight;town1;town2` over the given town
/// names, with `;` or `,` as the delimiter.
pub fn record(towns: &'static [&'static str]) -> impl Strategy<Value = String> {
    (
        "[A-Z][a-z]{0,8}( [A-Z][a-z]{0,8})?",
        0u32..1000,
        prop::sample::select(towns),
        prop::sample::select(towns),
        prop::bool::ANY,
    )
        .prop_map(|(road, weight, town1, town2, comma)| {
            let delimiter = if comma { ',' } else { ';' };
            format!("{road}{delimiter}{weight}{delimiter}{town1}{delimiter}{town2}")
        })
}

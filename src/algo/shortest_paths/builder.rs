use crate::core::{Error, Graph, Town};

use super::{dijkstra::dijkstra, ShortestPaths};

pub struct ShortestPathsBuilder<'a> {
    graph: &'a Graph,
    goal: Option<Town>,
}

impl<'a> ShortestPaths<'a> {
    pub fn on(graph: &'a Graph) -> ShortestPathsBuilder<'a> {
        ShortestPathsBuilder { graph, goal: None }
    }
}

impl<'a> ShortestPathsBuilder<'a> {
    /// Stops the search once `goal` is settled.
    pub fn goal(self, goal: Town) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn run(self, source: Town) -> Result<ShortestPaths<'a>, Error> {
        let ShortestPathsBuilder { graph, goal } = self;

        graph.check_town(&source)?;
        dijkstra(graph, source, goal)
    }
}

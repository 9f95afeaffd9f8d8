use crate::search::{
    search_engines::{AStar, GreedyBFS, TerminationCondition, BFS, DFS},
    Node, Problem, SearchStatistics,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub type SearchResult<P> = (
    Node<<P as Problem>::State, <P as Problem>::Action>,
    SearchStatistics,
);

pub trait SearchEngine {
    /// Search `problem` until a goal is reached, the frontier is exhausted or
    /// `termination` says to stop. Always returns a node: failures come back
    /// as [`Node::Failed`].
    fn search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P>;
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth-first graph search")]
    Dfs,
    #[clap(help = "Breadth-first graph search")]
    Bfs,
    #[clap(help = "Breadth-first tree search, no duplicate detection")]
    BfsTree,
    #[clap(help = "Greedy best-first search, ordered by h")]
    Greedy,
    #[clap(name = "astar", help = "A* search, ordered by g + h")]
    #[serde(rename = "astar")]
    #[strum(to_string = "astar")]
    AStar,
}

impl SearchEngineName {
    pub fn search<P: Problem>(
        &self,
        problem: &P,
        termination: &mut TerminationCondition,
    ) -> SearchResult<P> {
        let result = match self {
            SearchEngineName::Dfs => DFS::new().search(problem, termination),
            SearchEngineName::Bfs => BFS::graph().search(problem, termination),
            SearchEngineName::BfsTree => BFS::tree().search(problem, termination),
            SearchEngineName::Greedy => GreedyBFS::new().search(problem, termination),
            SearchEngineName::AStar => AStar::new().search(problem, termination),
        };
        termination.finalise();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FailureReason;
    use crate::test_utils::*;
    use std::str::FromStr;

    const ALL_ENGINES: [SearchEngineName; 5] = [
        SearchEngineName::Dfs,
        SearchEngineName::Bfs,
        SearchEngineName::BfsTree,
        SearchEngineName::Greedy,
        SearchEngineName::AStar,
    ];

    #[test]
    fn goal_popped_at_the_node_limit_is_returned() {
        let problem = LineProblem::new(3, 1);
        for engine in ALL_ENGINES {
            let (node, statistics) =
                engine.search(&problem, &mut TerminationCondition::with_node_limit(1));
            assert_eq!(node.failure_reason(), None, "{}", engine);
            assert_eq!(node.state(), Some(&1), "{}", engine);
            assert_eq!(statistics.expanded_nodes(), 1, "{}", engine);
        }
    }

    #[test]
    fn solved_root_needs_no_expansion_budget() {
        let problem = LineProblem::new(3, 0);
        for engine in ALL_ENGINES {
            let (node, statistics) =
                engine.search(&problem, &mut TerminationCondition::with_node_limit(0));
            assert_eq!(node.state(), Some(&0), "{}", engine);
            assert_eq!(statistics.expanded_nodes(), 0, "{}", engine);
        }
    }

    #[test]
    fn node_limit_still_stops_unsolved_searches() {
        let problem = LineProblem::new(10, 9);
        for engine in ALL_ENGINES {
            let (node, _) = engine.search(&problem, &mut TerminationCondition::with_node_limit(3));
            assert_eq!(
                node.failure_reason(),
                Some(FailureReason::NodeLimitExceeded),
                "{}",
                engine
            );
        }
    }

    #[test]
    fn engine_names_are_kebab_case() {
        assert_eq!(SearchEngineName::BfsTree.to_string(), "bfs-tree");
        assert_eq!(SearchEngineName::AStar.to_string(), "astar");
        assert_eq!(
            SearchEngineName::from_str("astar").unwrap(),
            SearchEngineName::AStar
        );
        assert_eq!(
            SearchEngineName::from_str("greedy").unwrap(),
            SearchEngineName::Greedy
        );
    }
}

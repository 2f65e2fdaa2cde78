use crate::core::{Board, MoveUpdate, UserAction, step};
use crate::search::models::{Edge, Outcome, SearchStep, SolveConfig, StateGraph};
use std::collections::VecDeque;

/// Breadth-first exploration of the slide graph. The frontier is strictly
/// first-in-first-out, so the first recorded distance for any state is the
/// minimum number of moves that reaches it.
pub struct Solver {
    graph: StateGraph,
    frontier: VecDeque<(usize, Board)>,
    config: SolveConfig,
}

impl Solver {
    pub fn new(board: Board, config: SolveConfig) -> Solver {
        let mut graph = StateGraph::new();
        // the graph is empty, the start state is always new
        let start_id = graph.insert_state(board.encode(), 0).unwrap();
        let mut frontier = VecDeque::new();
        frontier.push_back((start_id, board));
        Solver {
            graph,
            frontier,
            config,
        }
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Dequeues and expands the oldest frontier state.
    pub fn step(&mut self) -> SearchStep {
        let Some((from_id, board)) = self.frontier.pop_front() else {
            return SearchStep::Exhausted;
        };
        let distance = self.graph.distance(from_id);

        if board.is_goal() {
            return SearchStep::Solved(distance);
        }

        if let Some(limit) = self.config.move_limit {
            if distance >= limit {
                return SearchStep::Expanded;
            }
        }

        // vehicle index order, forward before backward, so exploration is
        // reproducible
        for action in UserAction::all_actions(board.vehicles.len()) {
            let MoveUpdate::NextState(next) = step(&board, action) else {
                continue;
            };
            let key = next.encode();
            match self.graph.insert_state(key, distance + 1) {
                Some(to_id) => {
                    self.graph.add_edge(Edge {
                        from: from_id,
                        to: to_id,
                    });
                    self.frontier.push_back((to_id, next));
                }
                None => {
                    if let Some(to_id) = self.graph.id_of(&key) {
                        self.graph.add_edge(Edge {
                            from: from_id,
                            to: to_id,
                        });
                    }
                }
            }
        }
        SearchStep::Expanded
    }

    pub fn run(&mut self) -> Outcome {
        loop {
            match self.step() {
                SearchStep::Solved(moves) => return Outcome::Solved(moves),
                SearchStep::Exhausted => return Outcome::Unsolvable,
                SearchStep::Expanded => {}
            }
        }
    }
}

pub fn solve(board: &Board, config: SolveConfig) -> Outcome {
    Solver::new(board.clone(), config).run()
}

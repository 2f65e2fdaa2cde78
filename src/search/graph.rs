use crate::core::BoardKey;
use crate::search::models::{Edge, StateGraph};
use std::collections::HashSet;

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            distances: Vec::new(),
            next_id: 0,
        }
    }

    /// Records a newly discovered state at the given distance and returns
    /// its id, or None if the state is already known. First discovery wins;
    /// a recorded distance is never changed afterwards.
    pub fn insert_state(&mut self, key: BoardKey, distance: usize) -> Option<usize> {
        if self.nodes.contains_left(&key) {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;

        // the insertion is unique: the id is fresh and the key was just checked
        self.nodes.insert_no_overwrite(key, id).unwrap();
        self.distances.push(distance);
        Some(id)
    }

    pub fn id_of(&self, key: &BoardKey) -> Option<usize> {
        self.nodes.get_by_left(key).copied()
    }

    pub fn distance(&self, id: usize) -> usize {
        self.distances[id]
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }
}

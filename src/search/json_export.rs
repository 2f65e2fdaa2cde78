use crate::search::models::StateGraph;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    moves: usize,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
}

pub fn get_json_data(graph: &StateGraph) -> String {
    let nodes: Vec<JsonNode> = graph
        .nodes
        .iter()
        .map(|(_, &id)| JsonNode {
            id,
            moves: graph.distance(id),
        })
        .collect();

    let links: Vec<JsonEdge> = graph
        .edges
        .iter()
        .map(|edge| JsonEdge {
            source: edge.from,
            target: edge.to,
        })
        .collect();

    let json_data = JsonData { nodes, links };
    serde_json::to_string_pretty(&json_data).unwrap()
}

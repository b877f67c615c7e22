use crate::task::TaskDefinition;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Dependency graph over a project plan, one node per task id with an edge
/// from each predecessor to its dependent.
pub struct PlanDag {
    pub graph: DiGraph<i32, ()>,
    pub id_to_index: HashMap<i32, NodeIndex>,
    pub durations: HashMap<i32, i64>,
}

impl PlanDag {
    pub fn build(tasks: &[TaskDefinition]) -> Self {
        let mut graph: DiGraph<i32, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i32, NodeIndex> = HashMap::new();
        let mut durations: HashMap<i32, i64> = HashMap::new();

        // Add nodes first
        for task in tasks {
            let node_ix = graph.add_node(task.id);
            id_to_index.insert(task.id, node_ix);
            durations.insert(task.id, task.duration_days);
        }

        // Add edges: pred -> task
        for task in tasks {
            for pred_id in &task.predecessors {
                if let (Some(&u), Some(&v)) = (id_to_index.get(pred_id), id_to_index.get(&task.id))
                {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self {
            graph,
            id_to_index,
            durations,
        }
    }
}

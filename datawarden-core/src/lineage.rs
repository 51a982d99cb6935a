//! Lineage graph for governance reports.
//!
//! Records how the artifacts in one governance run relate: which datasets
//! were profiled, which produced the cleaned artifact, and what fed the
//! report. Static per run; there is no cross-run lineage here.

use serde::{Deserialize, Serialize};

/// A node in the lineage graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageNode {
    /// Stable identifier within the graph
    pub id: String,
    /// Human-readable label
    pub label: String,
}

/// A directed edge describing one processing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageEdge {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// What operation produced the target
    pub operation: String,
}

/// Lineage of one governance run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageGraph {
    /// All artifacts involved in the run
    pub nodes: Vec<LineageNode>,
    /// Processing relationships between artifacts
    pub edges: Vec<LineageEdge>,
}

/// Builds the lineage graph for a single governance run.
pub fn lineage_graph(
    baseline_name: &str,
    current_name: &str,
    cleaned_ref: &str,
) -> LineageGraph {
    let nodes = vec![
        LineageNode {
            id: "baseline".to_string(),
            label: baseline_name.to_string(),
        },
        LineageNode {
            id: "current".to_string(),
            label: current_name.to_string(),
        },
        LineageNode {
            id: "cleaned".to_string(),
            label: cleaned_ref.to_string(),
        },
        LineageNode {
            id: "report".to_string(),
            label: "governance report".to_string(),
        },
    ];

    let edges = vec![
        LineageEdge {
            from: "baseline".to_string(),
            to: "report".to_string(),
            operation: "profiled".to_string(),
        },
        LineageEdge {
            from: "current".to_string(),
            to: "report".to_string(),
            operation: "profiled and compared".to_string(),
        },
        LineageEdge {
            from: "current".to_string(),
            to: "cleaned".to_string(),
            operation: "deduplicated".to_string(),
        },
        LineageEdge {
            from: "cleaned".to_string(),
            to: "report".to_string(),
            operation: "summarized".to_string(),
        },
    ];

    LineageGraph { nodes, edges }
}

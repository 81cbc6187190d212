pub mod breakpoint;
pub mod classify;
pub mod gene_clustering;
pub mod truth;
#[macro_use]
extern crate log;

pub use breakpoint::{BreakpointConfig, BreakpointIntersection};
pub use classify::{Classifier, MarkReport};
pub use gene_clustering::GeneClustering;
pub use truth::parse_truth_set;

/// Edges of all the three criteria, in the order they are reported.
#[derive(Debug, Clone, Default)]
pub struct ClusteredEdges {
    pub breakpoint: Vec<definitions::ClusterEdge>,
    pub gene_pair: Vec<definitions::ClusterEdge>,
    pub gene_id: Vec<definitions::ClusterEdge>,
}

/// Run the breakpoint intersection, then the gene-pair and gene-ID clustering.
/// The ids of the gene edges start from (# of breakpoint edges) + 1 and run through both of them.
pub fn cluster_fusions(
    ds: &definitions::FusionSet,
    c: &BreakpointConfig,
) -> ClusteredEdges {
    let breakpoint = ds.intersect_by_breakpoints(c);
    let mut counter = breakpoint.len() as u64 + 1;
    let gene_pair = ds.cluster_by_gene_names(&mut counter);
    let gene_id = ds.cluster_by_gene_ids(&mut counter);
    debug!(
        "CLUSTER\t{}\t{}\t{}",
        breakpoint.len(),
        gene_pair.len(),
        gene_id.len()
    );
    ClusteredEdges {
        breakpoint,
        gene_pair,
        gene_id,
    }
}

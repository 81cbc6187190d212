//! Breakpoint intersection.
//! Two calls are linked when both of their breakpoints are within `slop` bases of each other.
//! The chromosomes are scoped by the sample, so calls from different samples never meet.
use definitions::*;
use std::collections::HashMap;

/// Default tolerance, in bases, on each side of a breakpoint.
pub const DEFAULT_SLOP: u64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct BreakpointConfig {
    /// Inclusive. Breakpoints at distance `slop` still intersect.
    slop: u64,
}

impl BreakpointConfig {
    pub fn new(slop: u64) -> Self {
        Self { slop }
    }
    pub fn slop(&self) -> u64 {
        self.slop
    }
}

impl std::default::Default for BreakpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SLOP)
    }
}

pub trait BreakpointIntersection {
    /// Return the intersecting pairs as edges, numbered from zero.
    /// Self pairs and both directions of a pair are included.
    fn intersect_by_breakpoints(&self, c: &BreakpointConfig) -> Vec<ClusterEdge>;
}

impl BreakpointIntersection for FusionSet {
    fn intersect_by_breakpoints(&self, c: &BreakpointConfig) -> Vec<ClusterEdge> {
        debug!("START\tBreakpoint intersection (slop={})", c.slop());
        let pairs = paired_self_intersection(&self.calls, c.slop());
        debug!("BREAKPOINT\t{}\t{}", self.calls.len(), pairs.len());
        pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (query, hit))| {
                let (query, hit) = (&self.calls[query], &self.calls[hit]);
                ClusterEdge::new(
                    idx as u64,
                    &query.fusion_id,
                    &hit.fusion_id,
                    EdgeKind::Breakpoint,
                )
            })
            .collect()
    }
}

/// Paired-interval self intersection of `calls`. Each call is a pair of 1-bp intervals
/// `[pos1, pos1 + 1)` and `[pos2, pos2 + 1)` on the sample-scoped chromosomes.
/// Return `(query, hit)` indices: queries in input order, hits of a query in input order.
pub fn paired_self_intersection(calls: &[FusionCall], slop: u64) -> Vec<(usize, usize)> {
    let keys: Vec<_> = calls.iter().map(|call| call.breakpoint_key()).collect();
    let mut buckets: HashMap<_, Vec<usize>> = HashMap::new();
    for (idx, key) in keys.iter().enumerate() {
        buckets.entry(key).or_default().push(idx);
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by_key(|&idx| (calls[idx].pos1, idx));
    }
    trace!("BREAKPOINT\t{}\tBuckets", buckets.len());
    let mut pairs = vec![];
    for (idx, (query, key)) in calls.iter().zip(keys.iter()).enumerate() {
        let bucket = &buckets[key];
        let start = query.pos1.saturating_sub(slop);
        let end = query.pos1.saturating_add(slop);
        let lower = bucket.partition_point(|&j| calls[j].pos1 < start);
        let mut hits: Vec<usize> = bucket[lower..]
            .iter()
            .take_while(|&&j| calls[j].pos1 <= end)
            .filter(|&&j| abs_diff(calls[j].pos2, query.pos2) <= slop)
            .copied()
            .collect();
        hits.sort_unstable();
        pairs.extend(hits.into_iter().map(|hit| (idx, hit)));
    }
    pairs
}

fn abs_diff(x: u64, y: u64) -> u64 {
    if x < y {
        y - x
    } else {
        x - y
    }
}

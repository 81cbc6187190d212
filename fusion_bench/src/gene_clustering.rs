use definitions::*;
use itertools::Itertools;
use std::collections::HashMap;

pub trait GeneClustering {
    /// Link every two calls sharing the gene symbols (and the chromosomes they sit on) in the same sample.
    /// `counter` is the id of the next edge and is advanced past the emitted edges.
    fn cluster_by_gene_names(&self, counter: &mut u64) -> Vec<ClusterEdge>;
    /// Link every two calls sharing the gene IDs in the same sample.
    fn cluster_by_gene_ids(&self, counter: &mut u64) -> Vec<ClusterEdge>;
}

impl GeneClustering for FusionSet {
    fn cluster_by_gene_names(&self, counter: &mut u64) -> Vec<ClusterEdge> {
        debug!("START\tClustering by gene names");
        let groups = group_calls(&self.calls, gene_name_key);
        permutation_edges(&groups, counter, EdgeKind::GenePair)
    }
    fn cluster_by_gene_ids(&self, counter: &mut u64) -> Vec<ClusterEdge> {
        debug!("START\tClustering by gene IDs");
        let groups = group_calls(&self.calls, gene_id_key);
        permutation_edges(&groups, counter, EdgeKind::GeneId)
    }
}

/// `sample::GENE_A|CHR_A,GENE_B|CHR_B`, sorted so that the two breakpoints may come in either order.
/// `None` if either gene is `NA`.
pub fn gene_name_key(call: &FusionCall) -> Option<String> {
    if call.gene1 == NA || call.gene2 == NA {
        return None;
    }
    let mut genes = [
        format!("{}|{}", call.gene1, call.chr1),
        format!("{}|{}", call.gene2, call.chr2),
    ];
    genes.sort();
    Some(format!("{}::{}", call.sample_name, genes.join(",")))
}

/// `sample::ID_A,ID_B`. `None` if either ID is `NA`.
pub fn gene_id_key(call: &FusionCall) -> Option<String> {
    if call.gene_id1 == NA || call.gene_id2 == NA {
        return None;
    }
    let mut ids = [call.gene_id1.as_str(), call.gene_id2.as_str()];
    ids.sort_unstable();
    Some(format!("{}::{}", call.sample_name, ids.join(",")))
}

/// Group the fusion ids by `key`. Groups come in the order of their first member,
/// and the members in input order.
fn group_calls<'a, F>(calls: &'a [FusionCall], key: F) -> Vec<Vec<&'a str>>
where
    F: Fn(&FusionCall) -> Option<String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&str>> = vec![];
    for call in calls.iter() {
        let key = match key(call) {
            Some(key) => key,
            None => continue,
        };
        let len = groups.len();
        let slot = *index.entry(key).or_insert(len);
        if slot == len {
            groups.push(vec![]);
        }
        groups[slot].push(call.fusion_id.as_str());
    }
    trace!("GROUPS\t{}", groups.len());
    groups
}

fn permutation_edges(groups: &[Vec<&str>], counter: &mut u64, kind: EdgeKind) -> Vec<ClusterEdge> {
    let mut edges = vec![];
    for group in groups.iter().filter(|g| 2 <= g.len()) {
        for pair in group.iter().permutations(2) {
            edges.push(ClusterEdge::new(*counter, pair[0], pair[1], kind));
            *counter += 1;
        }
    }
    debug!("{:?}\t{}\t{}", kind, groups.len(), edges.len());
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    fn call(id: &str, sample: &str, genes: (&str, &str), ids: (&str, &str)) -> FusionCall {
        FusionCall {
            fusion_id: id.to_string(),
            sample_name: sample.to_string(),
            chr1: "chr9".to_string(),
            pos1: 100,
            chr2: "chr22".to_string(),
            pos2: 200,
            gene1: genes.0.to_string(),
            gene2: genes.1.to_string(),
            gene_id1: ids.0.to_string(),
            gene_id2: ids.1.to_string(),
        }
    }
    fn dataset(calls: Vec<FusionCall>) -> FusionSet {
        FusionSet::new("test", CffLayout::annotated(), calls)
    }
    fn pairs(edges: &[ClusterEdge]) -> Vec<(&str, &str)> {
        edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }
    #[test]
    fn name_key_is_order_free() {
        let mut fwd = call("F1", "S1", ("ABL1", "BCR"), (NA, NA));
        fwd.chr1 = "chr9".to_string();
        fwd.chr2 = "chr22".to_string();
        let mut rev = call("F2", "S1", ("BCR", "ABL1"), (NA, NA));
        rev.chr1 = "chr22".to_string();
        rev.chr2 = "chr9".to_string();
        assert_eq!(gene_name_key(&fwd), gene_name_key(&rev));
        assert_eq!(
            gene_name_key(&fwd).unwrap(),
            "S1::ABL1|chr9,BCR|chr22".to_string()
        );
    }
    #[test]
    fn name_key_checks_chromosome() {
        let fwd = call("F1", "S1", ("ABL1", "BCR"), (NA, NA));
        let mut moved = call("F2", "S1", ("ABL1", "BCR"), (NA, NA));
        moved.chr2 = "chr7".to_string();
        assert_ne!(gene_name_key(&fwd), gene_name_key(&moved));
    }
    #[test]
    fn na_is_skipped() {
        assert!(gene_name_key(&call("F1", "S1", ("NA", "BCR"), (NA, NA))).is_none());
        assert!(gene_id_key(&call("F1", "S1", ("A", "B"), ("ENSG1", NA))).is_none());
        let id_key = gene_id_key(&call("F1", "S1", ("A", "B"), ("ENSG2", "ENSG1")));
        assert_eq!(id_key.unwrap(), "S1::ENSG1,ENSG2");
    }
    #[test]
    fn permutations_within_group() {
        let ds = dataset(vec![
            call("F1", "S1", ("ABL1", "BCR"), (NA, NA)),
            call("F2", "S1", ("ABL1", "BCR"), (NA, NA)),
            call("F3", "S1", ("ABL1", "BCR"), (NA, NA)),
            call("F4", "S1", ("MYC", "IGH"), (NA, NA)),
        ]);
        let mut counter = 10;
        let edges = ds.cluster_by_gene_names(&mut counter);
        let answer = vec![
            ("F1", "F2"),
            ("F1", "F3"),
            ("F2", "F1"),
            ("F2", "F3"),
            ("F3", "F1"),
            ("F3", "F2"),
        ];
        assert_eq!(pairs(&edges), answer);
        let ids: Vec<_> = edges.iter().map(|e| e.id).collect();
        assert_eq!(ids, (10..16).collect::<Vec<_>>());
        assert_eq!(counter, 16);
    }
    #[test]
    fn never_across_samples() {
        let ds = dataset(vec![
            call("F1", "S1", ("ABL1", "BCR"), ("ENSG1", "ENSG2")),
            call("F2", "S2", ("ABL1", "BCR"), ("ENSG1", "ENSG2")),
        ]);
        let mut counter = 0;
        assert!(ds.cluster_by_gene_names(&mut counter).is_empty());
        assert!(ds.cluster_by_gene_ids(&mut counter).is_empty());
        assert_eq!(counter, 0);
    }
    #[test]
    fn ids_are_not_deduplicated_against_names() {
        let ds = dataset(vec![
            call("F1", "S1", ("ABL1", "BCR"), ("ENSG1", "ENSG2")),
            call("F2", "S1", ("ABL1", "BCR"), ("ENSG2", "ENSG1")),
        ]);
        let mut counter = 1;
        let by_name = ds.cluster_by_gene_names(&mut counter);
        let by_id = ds.cluster_by_gene_ids(&mut counter);
        assert_eq!(pairs(&by_name), vec![("F1", "F2"), ("F2", "F1")]);
        assert_eq!(pairs(&by_id), vec![("F1", "F2"), ("F2", "F1")]);
        assert_eq!(by_id[0].id, 3);
        assert_eq!(by_id[0].kind, EdgeKind::GeneId);
    }
}

//! Benchmark fusion calls against a truth set.
//!
//! Each call is labeled `TP` when it is the first call matching a truth fusion, `TP-DUP` when
//! the truth fusion was already matched by an earlier call, and `FP` otherwise.
//! Truth fusions matched by no call are the false negatives.
//! The labels depend on the order of the calls.
use definitions::*;
use std::collections::HashSet;
use std::io::{BufRead, Write};

/// Name of the appended column.
pub const MATCH_COLUMN: &str = "match";
const SAMPLE_COLUMN: &str = "samples";
const GENE1_COLUMN: &str = "gene1";
const GENE2_COLUMN: &str = "gene2";

#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    truth: &'a TruthSet,
    detected: HashSet<TruthFusion>,
    summary: Summary,
}

impl<'a> Classifier<'a> {
    pub fn new(truth: &'a TruthSet) -> Self {
        Self {
            truth,
            detected: HashSet::new(),
            summary: Summary::default(),
        }
    }
    /// Label a call with the candidate genes at each breakpoint.
    /// The first combination found in the truth set decides the label.
    pub fn classify<S: AsRef<str>>(&mut self, sample: &str, genes1: &[S], genes2: &[S]) -> Label {
        let hit = genes1
            .iter()
            .flat_map(|g1| genes2.iter().map(move |g2| (g1.as_ref(), g2.as_ref())))
            .filter(|(g1, g2)| g1 != g2)
            .map(|(g1, g2)| TruthFusion::new(sample, g1, g2))
            .find(|fusion| self.truth.contains(fusion));
        let label = match hit {
            Some(fusion) if self.detected.contains(&fusion) => Label::TPDup,
            Some(fusion) => {
                self.detected.insert(fusion);
                Label::TP
            }
            None => Label::FP,
        };
        self.summary.count(label);
        label
    }
    /// Truth fusions not detected so far, sorted.
    pub fn false_negatives(&self) -> Vec<&TruthFusion> {
        let mut fns: Vec<_> = self
            .truth
            .fusions
            .iter()
            .filter(|fusion| !self.detected.contains(fusion))
            .collect();
        fns.sort();
        fns
    }
    pub fn summary(&self) -> Summary {
        Summary {
            fn_count: self.truth.len() - self.detected.len(),
            ..self.summary
        }
    }
}

/// Outcome of [mark_fusions].
#[derive(Debug, Clone)]
pub struct MarkReport {
    pub summary: Summary,
    pub false_negatives: Vec<TruthFusion>,
}

/// Split a comma-separated gene list. Whitespace around a gene and empty entries are dropped.
pub fn split_genes(genes: &str) -> Vec<&str> {
    genes
        .split(',')
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect()
}

fn invalid_data(msg: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
}

/// Read a tab-separated table with a header from `reader`, and write it to `wtr`
/// with a `match` column appended.
/// The table should have the `samples`, `gene1`, and `gene2` columns. The other columns are written as-is.
pub fn mark_fusions<R: BufRead, W: Write>(
    truth: &TruthSet,
    reader: R,
    mut wtr: W,
) -> std::io::Result<MarkReport> {
    let mut lines = reader.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(invalid_data("the input table is empty".to_string())),
    };
    let header: Vec<_> = header.trim_end_matches('\r').split('\t').collect();
    let column = |name: &str| -> std::io::Result<usize> {
        header
            .iter()
            .position(|&h| h == name)
            .ok_or_else(|| invalid_data(format!("the input table has no `{}` column", name)))
    };
    let (sample_col, gene1_col, gene2_col) = (
        column(SAMPLE_COLUMN)?,
        column(GENE1_COLUMN)?,
        column(GENE2_COLUMN)?,
    );
    writeln!(&mut wtr, "{}\t{}", header.join("\t"), MATCH_COLUMN)?;
    let mut classifier = Classifier::new(truth);
    for (i, line) in lines {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let mut row: Vec<_> = line.split('\t').collect();
        if header.len() < row.len() {
            let msg = format!(
                "line {}: {} fields, the header has {}",
                i + 1,
                row.len(),
                header.len()
            );
            return Err(invalid_data(msg));
        }
        row.resize(header.len(), "");
        let sample = row[sample_col].trim();
        let genes1 = split_genes(row[gene1_col]);
        let genes2 = split_genes(row[gene2_col]);
        let label = classifier.classify(sample, &genes1, &genes2);
        trace!("MARK\t{}\t{}", i + 1, label);
        writeln!(&mut wtr, "{}\t{}", row.join("\t"), label)?;
    }
    let summary = classifier.summary();
    let false_negatives = classifier.false_negatives().into_iter().cloned().collect();
    debug!(
        "MARK\t{}\t{}\t{}\t{}",
        summary.tp, summary.tp_dup, summary.fp, summary.fn_count
    );
    Ok(MarkReport {
        summary,
        false_negatives,
    })
}

use definitions::{TruthFusion, TruthSet};
use std::io::BufRead;

/// Parse a truth set. Each line is `sample|GENE1--GENE2`.
/// A line without exactly one `|` and one `--` is an error, blank lines included.
pub fn parse_truth_set<R: BufRead>(reader: R) -> std::io::Result<TruthSet> {
    let mut truth = TruthSet::default();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let fusion = parse_truth_line(line).ok_or_else(|| {
            let msg = format!("line {}: `{}` is not of the form sample|GENE1--GENE2", i + 1, line);
            std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
        })?;
        truth.fusions.insert(fusion);
    }
    debug!("TRUTH\t{}", truth.len());
    Ok(truth)
}

fn parse_truth_line(line: &str) -> Option<TruthFusion> {
    let mut fields = line.split('|');
    let (sample, fusion) = (fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }
    let mut genes = fusion.split("--");
    let (gene1, gene2) = (genes.next()?, genes.next()?);
    if genes.next().is_some() {
        return None;
    }
    Some(TruthFusion::new(sample, gene1, gene2))
}

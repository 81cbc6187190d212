use fusion_bench::{ClusteredEdges, MarkReport};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const MARKED_FUSIONS: &str = "marked_fusions.tsv";
pub const FALSE_NEGATIVES: &str = "false_negatives.txt";
pub const SUMMARY: &str = "summary.txt";

/// Write the edges as three tab-separated columns.
/// The breakpoint edges come first under a header, followed by the gene-pair and gene-ID edges without one.
pub fn write_cluster_edges<W: Write>(mut wtr: W, edges: &ClusteredEdges) -> std::io::Result<()> {
    writeln!(&mut wtr, "\tfusion_id\tfusion_id_lst")?;
    let all = edges
        .breakpoint
        .iter()
        .chain(edges.gene_pair.iter())
        .chain(edges.gene_id.iter());
    for edge in all {
        writeln!(&mut wtr, "{}", edge)?;
    }
    wtr.flush()
}

/// Create `dir` if needed. It is an error if `dir` exists and is not a directory.
pub fn prepare_output_dir(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("{:?} exists and is not a directory", dir);
        return Err(std::io::Error::new(std::io::ErrorKind::AlreadyExists, msg));
    }
    std::fs::create_dir_all(dir)
}

pub fn write_false_negatives<W: Write>(mut wtr: W, report: &MarkReport) -> std::io::Result<()> {
    for fusion in report.false_negatives.iter() {
        writeln!(&mut wtr, "{}", fusion)?;
    }
    wtr.flush()
}

pub fn write_summary<W: Write>(mut wtr: W, report: &MarkReport) -> std::io::Result<()> {
    writeln!(&mut wtr, "{}", report.summary)?;
    wtr.flush()
}

/// Write `false_negatives.txt` and `summary.txt` into `dir`.
pub fn write_report(dir: &Path, report: &MarkReport) -> std::io::Result<()> {
    let fns = std::fs::File::create(dir.join(FALSE_NEGATIVES)).map(BufWriter::new)?;
    write_false_negatives(fns, report)?;
    let summary = std::fs::File::create(dir.join(SUMMARY)).map(BufWriter::new)?;
    write_summary(summary, report)?;
    debug!("Wrote {:?} and {:?}", FALSE_NEGATIVES, SUMMARY);
    Ok(())
}

//! Definitions -- A tiny interface for benchmarking gene-fusion calls.
//! Both tools read flat files into the structures below, hold them for one pass, and write the results out as TSV/text.
//! Nothing here knows how to cluster or classify; see the `fusion_bench` crate for that.

/// The sentinel used by the annotation step when a gene or a gene ID could not be assigned.
pub const NA: &str = "NA";

/// Attributes of the first zone of a CFF line: the breakpoints.
pub const ZONE1_ATTRS: [&str; 6] = ["chr1", "pos1", "strand1", "chr2", "pos2", "strand2"];
/// Attributes of the second zone: where the call came from.
pub const ZONE2_ATTRS: [&str; 4] = ["library", "sample_name", "sample_type", "disease"];
/// Attributes of the third zone: the caller's own report.
pub const ZONE3_ATTRS: [&str; 8] = [
    "tool", "type", "split_cnt", "span_cnt", "t_gene1", "t_area1", "t_gene2", "t_area2",
];
/// Attributes of the fourth zone, appended by re-annotation.
pub const ZONE4_ATTRS: [&str; 19] = [
    "category",
    "reann_gene1",
    "reann_type1",
    "reann_gene2",
    "reann_type2",
    "gene1_on_bnd",
    "gene1_close_to_bnd",
    "gene2_on_bnd",
    "gene2_close_to_bnd",
    "dna_supp",
    "fusion_id",
    "seq1",
    "seq2",
    "is_inframe",
    "splice_site1",
    "splice_site2",
    "captured_reads",
    "t_gene_id1",
    "t_gene_id2",
];

fn invalid_data<E: Into<Box<dyn std::error::Error + Send + Sync>>>(msg: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
}

/// Column layout of a CFF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CffLayout {
    pub columns: Vec<String>,
}

impl CffLayout {
    /// Zone 1 to 3. What a fusion caller writes before re-annotation.
    pub fn raw() -> Self {
        let columns = ZONE1_ATTRS
            .iter()
            .chain(ZONE2_ATTRS.iter())
            .chain(ZONE3_ATTRS.iter())
            .map(|x| x.to_string())
            .collect();
        Self { columns }
    }
    /// Zone 1 to 4.
    pub fn annotated() -> Self {
        let mut layout = Self::raw();
        layout
            .columns
            .extend(ZONE4_ATTRS.iter().map(|x| x.to_string()));
        layout
    }
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self { columns }
    }
    /// Determine the layout from the first data line of a CFF file.
    pub fn detect(line: &str) -> std::io::Result<Self> {
        let num_of_fields = line.split('\t').count();
        let (raw, annotated) = (Self::raw(), Self::annotated());
        if num_of_fields == raw.len() {
            Ok(raw)
        } else if num_of_fields == annotated.len() {
            Ok(annotated)
        } else {
            Err(invalid_data(format!(
                "CFF format error: {} columns, expected {} or {}",
                num_of_fields,
                raw.len(),
                annotated.len()
            )))
        }
    }
    pub fn len(&self) -> usize {
        self.columns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionCall {
    /// Unique within one CFF file.
    pub fusion_id: String,
    pub sample_name: String,
    pub chr1: String,
    pub pos1: u64,
    pub chr2: String,
    pub pos2: u64,
    /// Translated gene symbol of the first breakpoint. Possibly `NA`.
    pub gene1: String,
    pub gene2: String,
    /// Stable gene identifier of the first breakpoint. `NA` if unknown
    /// or if the file was never re-annotated.
    pub gene_id1: String,
    pub gene_id2: String,
}

impl FusionCall {
    /// Parse a tab-separated line according to `layout`.
    pub fn from_line(line: &str, layout: &CffLayout) -> std::io::Result<Self> {
        let fields: Vec<_> = line.split('\t').collect();
        if fields.len() != layout.len() {
            return Err(invalid_data(format!(
                "CFF format error: {} columns, the layout has {}",
                fields.len(),
                layout.len()
            )));
        }
        let get = |name: &str| -> std::io::Result<String> {
            layout
                .position(name)
                .map(|i| fields[i].to_string())
                .ok_or_else(|| invalid_data(format!("CFF layout lacks the `{}` column", name)))
        };
        let get_or_na = |name: &str| -> String {
            layout
                .position(name)
                .map(|i| fields[i].to_string())
                .unwrap_or_else(|| NA.to_string())
        };
        let parse_pos = |name: &str| -> std::io::Result<u64> {
            let pos = get(name)?;
            pos.trim()
                .parse()
                .map_err(|_| invalid_data(format!("{} is not a position ({})", pos, name)))
        };
        Ok(Self {
            fusion_id: get("fusion_id")?,
            sample_name: get("sample_name")?,
            chr1: get("chr1")?,
            pos1: parse_pos("pos1")?,
            chr2: get("chr2")?,
            pos2: parse_pos("pos2")?,
            gene1: get("t_gene1")?,
            gene2: get("t_gene2")?,
            gene_id1: get_or_na("t_gene_id1"),
            gene_id2: get_or_na("t_gene_id2"),
        })
    }
    /// `(sample, chr1, chr2)`. Breakpoints are only compared between calls sharing this key,
    /// which scopes the chromosomes by the sample.
    pub fn breakpoint_key(&self) -> (&str, &str, &str) {
        (&self.sample_name, &self.chr1, &self.chr2)
    }
}

/// All the fusion calls of a CFF file, in the order of the file.
#[derive(Debug, Clone)]
pub struct FusionSet {
    pub input_file: String,
    pub layout: CffLayout,
    pub calls: Vec<FusionCall>,
}

impl FusionSet {
    pub fn new(input_file: &str, layout: CffLayout, calls: Vec<FusionCall>) -> Self {
        Self {
            input_file: input_file.to_string(),
            layout,
            calls,
        }
    }
    /// Read a CFF file. Lines starting with `#` and blank lines are skipped.
    /// If `layout` is `None`, it is detected from the first data line.
    pub fn from_reader<R: std::io::BufRead>(
        input_file: &str,
        reader: R,
        layout: Option<CffLayout>,
    ) -> std::io::Result<Self> {
        let mut layout = layout;
        let mut calls = vec![];
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if layout.is_none() {
                layout = Some(CffLayout::detect(&line)?);
            }
            if let Some(layout) = layout.as_ref() {
                let call = FusionCall::from_line(&line, layout)
                    .map_err(|e| invalid_data(format!("{}:{}: {}", input_file, i + 1, e)))?;
                calls.push(call);
            }
        }
        let layout = layout.unwrap_or_else(CffLayout::annotated);
        Ok(Self::new(input_file, layout, calls))
    }
}

/// A known true fusion. The genes are kept in lexicographic order.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TruthFusion {
    pub sample: String,
    pub genes: (String, String),
}

impl TruthFusion {
    pub fn new(sample: &str, gene1: &str, gene2: &str) -> Self {
        let genes = if gene1 <= gene2 {
            (gene1.to_string(), gene2.to_string())
        } else {
            (gene2.to_string(), gene1.to_string())
        };
        Self {
            sample: sample.to_string(),
            genes,
        }
    }
}

impl std::fmt::Display for TruthFusion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}|{}--{}", self.sample, self.genes.0, self.genes.1)
    }
}

/// The reference set. Built once, used only for membership tests.
#[derive(Debug, Clone, Default)]
pub struct TruthSet {
    pub fusions: std::collections::HashSet<TruthFusion>,
}

impl TruthSet {
    pub fn contains(&self, fusion: &TruthFusion) -> bool {
        self.fusions.contains(fusion)
    }
    pub fn len(&self) -> usize {
        self.fusions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fusions.is_empty()
    }
}

/// By which criterion two calls were judged equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Breakpoint,
    GenePair,
    GeneId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEdge {
    /// Unique across all the edges emitted in one run.
    pub id: u64,
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

impl ClusterEdge {
    pub fn new(id: u64, from: &str, to: &str, kind: EdgeKind) -> Self {
        Self {
            id,
            from: from.to_string(),
            to: to.to_string(),
            kind,
        }
    }
}

impl std::fmt::Display for ClusterEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.id, self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    TP,
    TPDup,
    FP,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Label::TP => "TP",
            Label::TPDup => "TP-DUP",
            Label::FP => "FP",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub tp: usize,
    pub tp_dup: usize,
    pub fp: usize,
    pub fn_count: usize,
}

impl Summary {
    pub fn count(&mut self, label: Label) {
        match label {
            Label::TP => self.tp += 1,
            Label::TPDup => self.tp_dup += 1,
            Label::FP => self.fp += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "TP: {}", self.tp)?;
        writeln!(f, "TP-DUP: {}", self.tp_dup)?;
        writeln!(f, "FP: {}", self.fp)?;
        write!(f, "FN: {}", self.fn_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn annotated_line(fields: &[(&str, &str)]) -> String {
        let layout = CffLayout::annotated();
        let mut line = vec!["."; layout.len()];
        for &(name, value) in fields {
            line[layout.position(name).unwrap()] = value;
        }
        line.join("\t")
    }
    #[test]
    fn layout_lengths() {
        assert_eq!(CffLayout::raw().len(), 18);
        assert_eq!(CffLayout::annotated().len(), 37);
    }
    #[test]
    fn detect_layout() {
        let raw = vec!["x"; 18].join("\t");
        assert_eq!(CffLayout::detect(&raw).unwrap(), CffLayout::raw());
        let annotated = vec!["x"; 37].join("\t");
        assert_eq!(CffLayout::detect(&annotated).unwrap(), CffLayout::annotated());
        let broken = vec!["x"; 20].join("\t");
        let err = CffLayout::detect(&broken).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
    #[test]
    fn parse_call() {
        let line = annotated_line(&[
            ("chr1", "chr12"),
            ("pos1", "1000"),
            ("chr2", "chr3"),
            ("pos2", "5000"),
            ("sample_name", "S1"),
            ("t_gene1", "BRCA1"),
            ("t_gene2", "TP53"),
            ("fusion_id", "F00001"),
            ("t_gene_id1", "ENSG01"),
            ("t_gene_id2", "NA"),
        ]);
        let call = FusionCall::from_line(&line, &CffLayout::annotated()).unwrap();
        assert_eq!(call.fusion_id, "F00001");
        assert_eq!(call.pos1, 1000);
        assert_eq!(call.pos2, 5000);
        assert_eq!(call.gene_id2, NA);
        assert_eq!(call.breakpoint_key(), ("S1", "chr12", "chr3"));
    }
    #[test]
    fn parse_call_bad_position() {
        let line = annotated_line(&[("pos1", "12a"), ("pos2", "3")]);
        assert!(FusionCall::from_line(&line, &CffLayout::annotated()).is_err());
    }
    #[test]
    fn raw_layout_lacks_fusion_id() {
        let mut fields = vec!["1"; 18];
        fields[0] = "chr1";
        let line = fields.join("\t");
        let err = FusionCall::from_line(&line, &CffLayout::raw()).unwrap_err();
        assert!(err.to_string().contains("fusion_id"));
    }
    #[test]
    fn fusion_set_skips_comments() {
        let line = annotated_line(&[("pos1", "1"), ("pos2", "2"), ("fusion_id", "F1")]);
        let input = format!("#comment\n{}\n\n{}\n", line, line);
        let set = FusionSet::from_reader("test.cff", std::io::Cursor::new(input), None).unwrap();
        assert_eq!(set.calls.len(), 2);
        assert_eq!(set.layout, CffLayout::annotated());
    }
    #[test]
    fn row_with_wrong_column_count() {
        let first = annotated_line(&[("pos1", "1"), ("pos2", "2"), ("fusion_id", "F1")]);
        let mut second: Vec<_> = first.split('\t').collect();
        second.pop();
        let input = format!("#comment\n{}\n{}\n", first, second.join("\t"));
        let err = FusionSet::from_reader("calls.cff", std::io::Cursor::new(input), None).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("calls.cff:3:"));
        assert!(err.to_string().contains("36 columns"));
    }
    #[test]
    fn given_layout_skips_detection() {
        let columns = [
            "fusion_id", "t_gene2", "t_gene1", "pos2", "chr2", "pos1", "chr1", "sample_name",
        ];
        let layout = CffLayout::with_columns(columns.iter().map(|x| x.to_string()).collect());
        let input = "F7\tTP53\tBRCA1\t5000\tchr17\t1000\tchr13\tS4\n";
        let set = FusionSet::from_reader("custom.cff", std::io::Cursor::new(input), Some(layout.clone()))
            .unwrap();
        assert_eq!(set.layout, layout);
        assert_eq!(set.calls.len(), 1);
        let call = &set.calls[0];
        assert_eq!(call.fusion_id, "F7");
        assert_eq!(call.sample_name, "S4");
        assert_eq!((call.chr1.as_str(), call.pos1), ("chr13", 1000));
        assert_eq!((call.chr2.as_str(), call.pos2), ("chr17", 5000));
        assert_eq!((call.gene1.as_str(), call.gene2.as_str()), ("BRCA1", "TP53"));
        assert_eq!((call.gene_id1.as_str(), call.gene_id2.as_str()), (NA, NA));
        // An 8-column line would not be detected as either zone layout.
        assert!(FusionSet::from_reader("custom.cff", std::io::Cursor::new(input), None).is_err());
    }
    #[test]
    fn truth_fusion_is_unordered() {
        let a = TruthFusion::new("S2", "MYC", "ALK");
        let b = TruthFusion::new("S2", "ALK", "MYC");
        assert_eq!(a, b);
        assert_eq!(format!("{}", a), "S2|ALK--MYC");
    }
    #[test]
    fn summary_display() {
        let mut summary = Summary::default();
        summary.count(Label::TP);
        summary.count(Label::TPDup);
        summary.count(Label::TPDup);
        summary.fn_count = 3;
        assert_eq!(format!("{}", summary), "TP: 1\nTP-DUP: 2\nFP: 0\nFN: 3");
        assert_eq!(format!("{}", Label::TPDup), "TP-DUP");
    }
}

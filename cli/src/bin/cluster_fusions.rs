use definitions::FusionSet;
use fusion_bench_cli::output::write_cluster_edges;
use fusion_bench_cli::profile::ClusterProfile;
use std::io::{BufReader, BufWriter};
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = fusion_bench_cli::commands::cluster_parser().get_matches();
    let profile = match matches.get_one::<String>("profile") {
        Some(path) => ClusterProfile::from_path(path)?,
        None => ClusterProfile::default(),
    };
    let slop = matches.get_one::<u64>("slop").copied();
    let verbose = matches.get_count("verbose") as usize;
    let profile = profile.merge(slop, verbose);
    fusion_bench_cli::init_logger(profile.verbose.unwrap_or(0));
    let file: &String = matches
        .get_one("cff")
        .expect("the CFF file is a required argument");
    debug!("Opening {}", file);
    let reader = std::fs::File::open(file).map(BufReader::new)?;
    let ds = FusionSet::from_reader(file, reader, profile.layout())?;
    info!("Read {} fusion calls from {}", ds.calls.len(), file);
    let config = profile.breakpoint_config();
    info!("Intersecting fusions by breakpoints, keeping self-intersections (slop={})", config.slop());
    let edges = fusion_bench::cluster_fusions(&ds, &config);
    info!(
        "{} breakpoint edges, {} gene-pair edges, {} gene-ID edges",
        edges.breakpoint.len(),
        edges.gene_pair.len(),
        edges.gene_id.len()
    );
    let stdout = std::io::stdout();
    let wtr = BufWriter::new(stdout.lock());
    write_cluster_edges(wtr, &edges)
}

use fusion_bench_cli::output::{prepare_output_dir, write_report, MARKED_FUSIONS};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = fusion_bench_cli::commands::mark_parser().get_matches();
    fusion_bench_cli::init_logger(matches.get_count("verbose") as usize);
    let input: &String = matches.get_one("input").expect("--input is required");
    let truth: &String = matches.get_one("truth").expect("--truth is required");
    let output_dir: &String = matches
        .get_one("output_dir")
        .expect("--output_dir is required");
    let output_dir = Path::new(output_dir);
    prepare_output_dir(output_dir)?;
    debug!("Opening {}", truth);
    let truth = std::fs::File::open(truth)
        .map(BufReader::new)
        .and_then(fusion_bench::parse_truth_set)?;
    info!("{} fusions in the truth set", truth.len());
    debug!("Opening {}", input);
    let reader = std::fs::File::open(input).map(BufReader::new)?;
    let mut wtr = std::fs::File::create(output_dir.join(MARKED_FUSIONS)).map(BufWriter::new)?;
    let report = fusion_bench::classify::mark_fusions(&truth, reader, &mut wtr)?;
    wtr.flush()?;
    write_report(output_dir, &report)?;
    info!("{}", report.summary.to_string().replace('\n', ", "));
    println!("Benchmarking results written to {}", output_dir.display());
    Ok(())
}

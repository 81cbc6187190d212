use clap::{value_parser, Arg, ArgAction, Command};

fn verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Debug mode")
}

pub fn cluster_parser() -> Command {
    Command::new("cluster_fusions")
        .version("0.1")
        .about("Cluster fusion calls in a CFF file by breakpoints, gene names, and gene IDs. Edges go to the STDOUT.")
        .arg(verbose())
        .arg(
            Arg::new("cff")
                .value_name("CFF")
                .required(true)
                .help("CFF file"),
        )
        .arg(
            Arg::new("slop")
                .short('s')
                .long("slop")
                .value_name("BP")
                .value_parser(value_parser!(u64))
                .help("Tolerance on both sides of a breakpoint. [default: 100]"),
        )
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("TOML")
                .help("Profile in TOML. Command line options take precedence over it."),
        )
}

pub fn mark_parser() -> Command {
    Command::new("mark_fusions")
        .version("0.1")
        .about("Mark fusions as TP, TP-DUP, FP; output FNs and summary.")
        .arg(verbose())
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("TSV")
                .required(true)
                .help("Input TSV file with fusion calls"),
        )
        .arg(
            Arg::new("truth")
                .long("truth")
                .value_name("TRUTH")
                .required(true)
                .help("Truth set file (format: sample|GENE1--GENE2)"),
        )
        .arg(
            Arg::new("output_dir")
                .long("output_dir")
                .value_name("DIR")
                .required(true)
                .help("Directory where outputs will be saved"),
        )
}

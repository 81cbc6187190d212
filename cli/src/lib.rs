pub mod commands;
pub mod output;
pub mod profile;
#[macro_use]
extern crate log;

/// Set up the logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(verbose: usize) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

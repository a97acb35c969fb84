//! Command-line front end for the `hashdrill-core` exercises.

pub mod bench;
pub mod cli;
pub mod output;

/// Install the stderr logger.
///
/// `level` is the floor chosen on the command line; `RUST_LOG`, when set,
/// takes precedence.
pub fn setup(level: Option<log::LevelFilter>) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.unwrap_or(log::LevelFilter::Warn))
        .parse_default_env();
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

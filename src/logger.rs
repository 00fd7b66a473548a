/// Initializes env_logger for the `bp` binary.
///
/// Verbose runs log every step and command at debug level; otherwise only
/// warnings reach stderr. `RUST_LOG` still overrides both.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();
}

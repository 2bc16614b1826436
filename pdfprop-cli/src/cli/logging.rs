//! Diagnostic logging setup shared by the binaries.

use env_logger::Env;

/// Install `env_logger`, honouring `RUST_LOG`.
///
/// Without `RUST_LOG`, only warnings are shown unless `verbose` is set.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

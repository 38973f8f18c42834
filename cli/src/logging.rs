use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Diagnostics go to stdout as `[LEVEL] message`, only when `verbose` is set
pub(crate) fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    };

    Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module("apk_summary", level)
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

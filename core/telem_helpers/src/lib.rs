use log::{info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use telem_mappings::{registry, MappingRegistry};

/// This is a basic setup for an application publishing field values on the telemetry bus.
/// Duplicate and customize as needed when your needs grow.
///
/// text_log: if true, installs a terminal logger at `level`. Leave it off when the host
/// application already installed its own `log` backend.
///
/// Returns the process-wide mapping registry, built if this is the first use.
pub fn basic_setup(text_log: bool, level: LevelFilter) -> &'static MappingRegistry {
    if text_log
        && TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )
        .is_err()
    {
        warn!("A logger was already installed, keeping it");
    }

    let registry = registry();
    for mapping in registry.iter() {
        info!(
            "{} -> {}",
            mapping.field_type_name(),
            mapping.wire_type()
        );
    }
    registry
}

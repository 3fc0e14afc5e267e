use log::LevelFilter;

/// Routes `log` records to stderr so stdout stays parseable.
///
/// # Errors
/// Fails if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S%.3f]"),
                record.target(),
                record.level(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

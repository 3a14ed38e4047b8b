use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Sets up tracing with a non-blocking daily log file under `logs/`.
///
/// Warnings and errors also go to stderr. Set `DEBUG=1` to capture debug
/// events. The returned guard must stay alive for the duration of the
/// process, or buffered log lines are lost.
pub fn init() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "mazewalk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let max_level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(non_blocking.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
        .init();

    guard
}

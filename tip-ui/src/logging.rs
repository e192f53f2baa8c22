use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
/// Kept at `warn` so log lines do not interleave with the form output.
pub const DEFAULT_FILTER: &str = "warn";

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`, coloured when writing to a terminal.
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            let colour = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{colour}m{:>5}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound log file ---

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock_file(file: &SharedFile) -> MutexGuard<'_, Option<File>> {
    file.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer target that starts empty and can be pointed at a file later.
/// Records are dropped while no file is set.
#[derive(Clone)]
struct LogFile(SharedFile);

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(lock_file(&self.0))
    }
}

// --- Runtime handles ---

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct Handles {
    console: ReloadFn,
    file: SharedFile,
}

static HANDLES: OnceLock<Handles> = OnceLock::new();

fn handles() -> Result<&'static Handles> {
    HANDLES.get().context("logging not yet initialized")
}

fn reloader<S>(handle: reload::Handle<EnvFilter, S>) -> ReloadFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    })
}

/// Parses a bare level ("warn", "debug", ...) or a full `EnvFilter` directive.
pub fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log level '{directive}'"))
}

fn initial_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => parse_filter(level),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

// --- Public API ---

/// Installs the global subscriber. Call once at startup.
///
/// - Console: stderr, coloured when attached to a terminal.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `level` if given, else `RUST_LOG`, else [`DEFAULT_FILTER`].
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let level_filter = initial_filter(level)?;
    // "trace" passes everything; the global level filter is still the ceiling.
    let (console_gate, console_handle) = reload::Layer::new(EnvFilter::new("trace"));
    let file: SharedFile = Arc::new(Mutex::new(None));

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(console_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(LogFile(file.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = HANDLES.set(Handles {
            console: reloader(console_handle),
            file,
        });
    }
    Ok(())
}

/// Shows or hides console log output without affecting file logging.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    let gate = EnvFilter::new(if enabled { "trace" } else { "off" });
    (handles()?.console)(gate)
}

/// Appends log output to `path`, replacing any file already open.
/// The parent directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let handles = handles()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_file(&handles.file) = Some(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filter_accepts_levels_and_directives() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("warn,tip_core=trace").is_ok());
    }

    #[test]
    fn parse_filter_rejects_garbage() {
        let err = parse_filter("tip_core=loud").unwrap_err();

        assert!(err.to_string().contains("tip_core=loud"));
    }

    #[test]
    fn explicit_level_is_parsed_instead_of_environment() {
        assert!(initial_filter(Some("error")).is_ok());
        assert!(initial_filter(Some("tip_ui=sometimes")).is_err());
    }

    #[test]
    fn runtime_changes_need_initialized_logging() {
        // No test in this crate installs the global subscriber.
        assert!(set_console_enabled(false).is_err());
        assert!(enable_file_logging(Path::new("/tmp/tip-ui-test.log")).is_err());
    }
}

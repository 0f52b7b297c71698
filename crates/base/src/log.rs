use {chrono::Local, std::sync::Mutex};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
            Level::Fatal => write!(f, "FATAL"),
        }
    }
}

impl From<::log::Level> for Level {
    fn from(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Trace | ::log::Level::Debug => Level::Debug,
            ::log::Level::Info => Level::Info,
            ::log::Level::Warn => Level::Warn,
            ::log::Level::Error => Level::Error,
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: Level, file: &str, line: usize, message: &str);
}

pub static LOGGER: Mutex<Option<Box<dyn Logger>>> = Mutex::new(None);

/// Local wall-clock time, second resolution.
pub fn format_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn format_line(level: Level, file: &str, line: usize, message: &str) -> String {
    let timestamp = format_timestamp();
    let thread_id = std::thread::current().id();
    format!(
        "[{:?}:{}:{} - {}:{}] {}",
        thread_id, level, timestamp, file, line, message
    )
}

/// Forwards records from the `log` facade (used by the library crates) into
/// the installed `Logger`.
struct FacadeBridge;

impl ::log::Log for FacadeBridge {
    fn enabled(&self, _metadata: &::log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &::log::Record) {
        if let Some(logger) = LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            logger.log(
                record.level().into(),
                record.file().unwrap_or(record.target()),
                record.line().unwrap_or(0) as usize,
                &record.args().to_string(),
            );
        }
    }

    fn flush(&self) {}
}

static FACADE_BRIDGE: FacadeBridge = FacadeBridge;

fn install(logger: Box<dyn Logger>) {
    LOGGER
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .replace(logger);
    // a second install only swaps the sink, the bridge stays registered
    if ::log::set_logger(&FACADE_BRIDGE).is_ok() {
        ::log::set_max_level(::log::LevelFilter::Debug);
    }
}

pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, level: Level, file: &str, line: usize, message: &str) {
        println!("{}", format_line(level, file, line, message));
    }
}

pub fn init_stdout_logger() {
    install(Box::new(StdoutLogger));
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = $crate::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log($crate::log::Level::Debug, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = $crate::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log($crate::log::Level::Info, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = $crate::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log($crate::log::Level::Warn, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = $crate::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log($crate::log::Level::Error, file!(), line!() as usize, &message); } }};
}

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{ let message = format_args!($($arg)*).to_string(); if let Some(logger) = $crate::log::LOGGER.lock().unwrap_or_else(|e| e.into_inner()).as_ref() { logger.log($crate::log::Level::Fatal, file!(), line!() as usize, &message); } eprintln!("FATAL ERROR: {}", message); std::process::exit(1); }};
}

//! A minimal file logger for applications that do not install their own.
//!
//! The library crates only log through the `log` facade; nothing is
//! recorded until some logger is installed.

use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a logger appending records up to `level` to the file at `path`.
///
/// Fails if the file cannot be opened or a logger is already installed.
pub fn init_logger(path: impl AsRef<Path>, level: LevelFilter) -> crate::Result<()> {
    let file_path = path.as_ref().to_path_buf();
    OpenOptions::new().create(true).append(true).open(&file_path)?;

    log::set_boxed_logger(Box::new(FileLogger { file_path, level }))?;
    log::set_max_level(level);
    Ok(())
}

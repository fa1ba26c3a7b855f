//! Diagnostic output setup.
//!
//! Lines go to stderr and, when a log directory is given, are also appended
//! to a timestamped log file in that directory.

use super::config::TOOL_NAME;
use chrono::Local;
use env_logger::{Env, Target};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writer that duplicates every log line into a file
struct LogTee {
    file: File,
}

impl Write for LogTee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Build the log file name for a run started now
///
/// e.g. `o365_Audit_Log_Extractor_20191208-141500.log`
pub fn log_file_name() -> String {
    format!(
        "{}_{}.log",
        TOOL_NAME.replace(' ', "_"),
        Local::now().format("%Y%m%d-%H%M%S")
    )
}

/// Create `dir` if needed and open a fresh log file inside it for appending
pub fn open_log_file(dir: &Path) -> io::Result<(PathBuf, File)> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(log_file_name());
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Initialise the global logger
///
/// `verbose` selects `debug` instead of `info`; `RUST_LOG` still wins when set.
/// Returns the log file path when one was opened.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let log_level = if verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(log_level));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.level(),
            record.args()
        )
    });

    let log_path = match log_dir {
        Some(dir) => {
            let (path, file) = open_log_file(dir)?;
            builder.target(Target::Pipe(Box::new(LogTee { file })));
            Some(path)
        }
        None => None,
    };

    builder.init();
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_shape() {
        let name = log_file_name();
        assert!(name.starts_with("o365_Audit_Log_Extractor_"));
        assert!(name.ends_with(".log"));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("logs");

        let (path, _file) = open_log_file(&dir).unwrap();

        assert!(dir.is_dir());
        assert!(path.is_file());
        assert_eq!(path.parent(), Some(dir.as_path()));
    }

    #[test]
    fn test_log_tee_copies_lines_into_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (path, file) = open_log_file(temp_dir.path()).unwrap();

        let mut tee = LogTee { file };
        writeln!(tee, "2019-12-08 14:15:00,000 - INFO - Processing file: a.csv").unwrap();
        writeln!(tee, "2019-12-08 14:15:01,000 - ERROR - Unable to parse line 3").unwrap();
        tee.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "2019-12-08 14:15:00,000 - INFO - Processing file: a.csv\n\
             2019-12-08 14:15:01,000 - ERROR - Unable to parse line 3\n"
        );
    }
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use super::report::{RenderError, ReportFormat};

/// Failures while emitting a rendered report to its destination.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to render report: {0}")]
    Render(#[from] RenderError),
    #[error("failed to write report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for finished reports. A write either lands completely or not at all.
pub trait ReportSink: Send + Sync {
    fn write_report(&self, name: &str, body: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Writes reports into a directory through a temporary sibling file and a rename.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ReportSink for FileSink {
    fn write_report(&self, name: &str, body: &[u8]) -> Result<PathBuf, ExportError> {
        let target = self.directory.join(name);
        let staging = self.directory.join(format!(".{name}.partial"));

        fs::create_dir_all(&self.directory)
            .map_err(|source| io_failure(&self.directory, source))?;

        let written = fs::File::create(&staging)
            .and_then(|mut file| {
                file.write_all(body)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&staging, &target));

        if let Err(source) = written {
            let _ = fs::remove_file(&staging);
            return Err(io_failure(&target, source));
        }

        info!(path = %target.display(), bytes = body.len(), "screening report exported");
        Ok(target)
    }
}

fn io_failure(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// `eb1-screening-<date>.<ext>`
pub fn report_file_name(date: NaiveDate, format: ReportFormat) -> String {
    format!(
        "eb1-screening-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("eb1-screener-{label}-{nanos}"))
    }

    #[test]
    fn file_name_embeds_date_and_extension() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date");
        assert_eq!(
            report_file_name(date, ReportFormat::Json),
            "eb1-screening-2025-03-07.json"
        );
    }

    #[test]
    fn writes_complete_report_without_leftovers() {
        let dir = scratch_dir("write");
        let sink = FileSink::new(&dir);

        let path = sink
            .write_report("report.txt", b"RESULT: QUALIFIED\n")
            .expect("report written");

        assert_eq!(
            fs::read_to_string(&path).expect("report readable"),
            "RESULT: QUALIFIED\n"
        );
        assert!(!dir.join(".report.txt.partial").exists());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn surfaces_io_failures_with_the_target_path() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(&dir).expect("scratch dir");
        let blocker = dir.join("not-a-directory");
        fs::write(&blocker, b"file").expect("blocker written");

        let sink = FileSink::new(blocker.join("nested"));
        let err = sink
            .write_report("report.txt", b"body")
            .expect_err("parent is a file");

        match err {
            ExportError::Io { path, .. } => assert!(path.starts_with(&blocker)),
            other => panic!("expected io error, got {other:?}"),
        }
        fs::remove_dir_all(&dir).ok();
    }
}

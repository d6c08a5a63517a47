use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Buffered writer for the generated SQL file.
///
/// The whole document is rendered before this is created, so a failed run
/// never leaves a partially written file behind.
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputWriter {
    /// Create (or truncate) the output file, creating parent directories
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, file),
            path: path.to_path_buf(),
        })
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Flush and return the path written
    pub fn finish(mut self) -> io::Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

/// Write `text` to `path` in one go
pub fn write_output(path: &Path, text: &str) -> io::Result<PathBuf> {
    let mut writer = OutputWriter::create(path)?;
    writer.write_text(text)?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sample_data.sql");

        let written = write_output(&path, "-- Retail Sample Data\n").unwrap();
        assert_eq!(written, path);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "-- Retail Sample Data\n"
        );
    }

    #[test]
    fn test_write_output_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.sql");
        fs::write(&path, "old content that is longer").unwrap();

        write_output(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}

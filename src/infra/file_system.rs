use crate::domain::ports::fs::FileSystem;
use crate::error::{AppError, ErrPath};
use log::debug;
use std::fs::{self, File, Metadata, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

#[derive(Clone)]
pub struct FileSystemAdapter;

impl FileSystemAdapter {
    pub fn new() -> Self {
        FileSystemAdapter
    }
}

impl Default for FileSystemAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn map_io(path: &Path, e: std::io::Error) -> AppError {
    match e.kind() {
        ErrorKind::NotFound => AppError::Path(ErrPath::FileNotFound(path.display().to_string())),
        _ => AppError::from(e),
    }
}

impl FileSystem for FileSystemAdapter {
    fn open_lines(&self, path: &Path) -> Result<Box<dyn BufRead>, AppError> {
        debug!("open {}", path.display());
        let file = File::open(path).map_err(|e| map_io(path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        debug!("read {}", path.display());
        fs::read_to_string(path).map_err(|e| map_io(path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!("write {} ({} bytes)", path.display(), data.len());
        fs::write(path, data)?;
        Ok(())
    }

    fn append_file(&self, path: &Path, data: &[u8]) -> Result<(), AppError> {
        debug!("append {} ({} bytes)", path.display(), data.len());
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| map_io(path, e))?;
        file.write_all(data)?;
        file.flush()?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        debug!("remove {}", path.display());
        fs::remove_file(path).map_err(|e| map_io(path, e))
    }

    fn metadata(&self, path: &Path) -> Result<Metadata, AppError> {
        fs::metadata(path).map_err(|e| map_io(path, e))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

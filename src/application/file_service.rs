use std::io::BufRead;
use tracing::{debug, info};

use crate::{
    domain::{
        file::{FileContent, FileInfo, FilePath, to_local},
        ports::{config::AppConfig, fs::FileSystem},
    },
    error::{AppError, ErrPath},
};

pub struct FileService<F: FileSystem> {
    fs: F,
    config: AppConfig,
}

impl<F: FileSystem> FileService<F> {
    pub fn new(fs: F, config: AppConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn exists(&self, path: &FilePath) -> bool {
        self.fs.file_exists(path.as_path())
    }

    pub fn ensure_file(&self, path: &FilePath) -> Result<(), AppError> {
        if !self.exists(path) {
            return Err(AppError::Path(ErrPath::FileNotFound(path.to_string())));
        }
        if !self.fs.metadata(path.as_path())?.is_file() {
            return Err(AppError::Path(ErrPath::NotAFile(path.to_string())));
        }
        Ok(())
    }

    /// Stream the file, calling `visit` with each 1-based line number.
    pub fn for_each_line<V>(&self, path: &FilePath, mut visit: V) -> Result<usize, AppError>
    where
        V: FnMut(usize, &str),
    {
        self.ensure_file(path)?;
        let reader = self.fs.open_lines(path.as_path())?;

        let mut count = 0;
        for line in reader.lines() {
            let line = line?;
            count += 1;
            visit(count, &line);
        }
        debug!("streamed {} lines from {}", count, path);
        Ok(count)
    }

    pub fn read_content(&self, path: &FilePath) -> Result<FileContent, AppError> {
        self.ensure_file(path)?;
        let text = self.fs.read_to_string(path.as_path())?;
        Ok(FileContent::parse(&text))
    }

    pub fn line_count(&self, path: &FilePath) -> Result<usize, AppError> {
        Ok(self.read_content(path)?.len())
    }

    /// Create or replace `path` with `lines`.
    pub fn write(&self, path: &FilePath, lines: &[String]) -> Result<(), AppError> {
        let data = self.encode(lines);
        self.fs.write_file(path.as_path(), data.as_bytes())?;
        info!("wrote {} lines to {}", lines.len(), path);
        Ok(())
    }

    pub fn append(&self, path: &FilePath, lines: &[String]) -> Result<(), AppError> {
        self.ensure_file(path)?;
        let data = self.encode(lines);
        self.fs.append_file(path.as_path(), data.as_bytes())?;
        info!("appended {} lines to {}", lines.len(), path);
        Ok(())
    }

    pub fn overwrite(&self, path: &FilePath, lines: &[String]) -> Result<(), AppError> {
        self.ensure_file(path)?;
        self.write(path, lines)
    }

    /// Insert `lines` as one block before the 1-based line `line`, then
    /// rewrite the whole file. Out-of-range positions leave it untouched.
    pub fn insert_at_line(
        &self,
        path: &FilePath,
        line: usize,
        lines: &[String],
    ) -> Result<(), AppError> {
        let mut content = self.read_content(path)?;
        let block = lines.join(self.config.line_separator.as_str());
        content.insert(line, block)?;

        let data = content.serialize(&self.config.line_separator);
        self.fs.write_file(path.as_path(), data.as_bytes())?;
        info!("inserted {} lines at line {} of {}", lines.len(), line, path);
        Ok(())
    }

    pub fn delete(&self, path: &FilePath) -> Result<(), AppError> {
        self.ensure_file(path)?;
        self.fs.remove_file(path.as_path())?;
        info!("deleted {}", path);
        Ok(())
    }

    pub fn info(&self, path: &FilePath) -> Result<FileInfo, AppError> {
        self.ensure_file(path)?;
        let meta = self.fs.metadata(path.as_path())?;

        Ok(FileInfo {
            name: path.file_name(),
            size: meta.len(),
            // not every platform/filesystem records a birth time
            created: meta.created().ok().map(to_local),
            modified: to_local(meta.modified()?),
        })
    }

    fn encode(&self, lines: &[String]) -> String {
        FileContent::from_lines(lines.to_vec()).serialize(&self.config.line_separator)
    }
}

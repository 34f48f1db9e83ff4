use std::fs::Metadata;
use std::io::BufRead;
use std::path::Path;

use crate::error::AppError;

pub trait FileSystem {
    fn open_lines(&self, path: &Path) -> Result<Box<dyn BufRead>, AppError>;
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<(), AppError>;
    fn append_file(&self, path: &Path, data: &[u8]) -> Result<(), AppError>;
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
    fn metadata(&self, path: &Path) -> Result<Metadata, AppError>;
    fn file_exists(&self, path: &Path) -> bool;
}

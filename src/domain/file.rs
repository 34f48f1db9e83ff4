use chrono::{DateTime, Local};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{AppError, ErrInput, ErrPath};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath {
    pub path: PathBuf,
}

impl FilePath {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::Path(ErrPath::EmptyPath));
        }
        Ok(Self {
            path: PathBuf::from(raw),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.to_string())
    }
}

impl Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<&Path> for FilePath {
    fn from(value: &Path) -> Self {
        Self {
            path: value.to_path_buf(),
        }
    }
}

/// A text file as an ordered list of lines, terminators stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContent {
    lines: Vec<String>,
}

impl FileContent {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Insert `block` as a single element before the 1-based line `line`.
    /// Valid positions are 1 to `len() + 1`.
    pub fn insert(&mut self, line: usize, block: String) -> Result<(), AppError> {
        let max = self.lines.len() + 1;
        if line < 1 || line > max {
            return Err(AppError::Input(ErrInput::LineOutOfRange { line, max }));
        }
        self.lines.insert(line - 1, block);
        Ok(())
    }

    /// Every line followed by `separator`, the last one included.
    pub fn serialize(&self, separator: &str) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(separator);
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub created: Option<DateTime<Local>>,
    pub modified: DateTime<Local>,
}

impl FileInfo {
    pub fn created_display(&self) -> String {
        self.created
            .map(|t| format_timestamp(&t))
            .unwrap_or_else(|| "unavailable".to_string())
    }

    pub fn modified_display(&self) -> String {
        format_timestamp(&self.modified)
    }
}

pub fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Read,
    Write,
    Modify,
    Delete,
    Info,
    Exit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim() {
            "1" => Ok(MenuChoice::Read),
            "2" => Ok(MenuChoice::Write),
            "3" => Ok(MenuChoice::Modify),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Info),
            "6" => Ok(MenuChoice::Exit),
            other => Err(AppError::Input(ErrInput::InvalidChoice(other.to_string()))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyMode {
    Append,
    Overwrite,
    Insert,
}

impl ModifyMode {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim() {
            "1" => Ok(ModifyMode::Append),
            "2" => Ok(ModifyMode::Overwrite),
            "3" => Ok(ModifyMode::Insert),
            other => Err(AppError::Input(ErrInput::InvalidChoice(other.to_string()))),
        }
    }
}

pub fn parse_line_number(raw: &str) -> Result<usize, AppError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| AppError::Input(ErrInput::NotANumber(raw.trim().to_string())))
}

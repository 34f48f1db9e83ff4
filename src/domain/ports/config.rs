use std::env;

pub const DEFAULT_SENTINEL: &str = "END";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    /// Line closing a multi-line text entry.
    pub sentinel: String,
    /// Colored messages and syntax highlighting.
    pub color: bool,
    pub line_separator: String,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Some(sentinel) = env::var("FILEMANAGER_SENTINEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.sentinel = sentinel;
        }

        if Self::color_disabled() {
            config.color = false;
        }

        config
    }

    fn color_disabled() -> bool {
        if env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return true;
        }
        match env::var_os("FILEMANAGER_NO_COLOR") {
            Some(flag) => flag != "0" && flag != "false",
            None => false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "FileManager".to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            color: true,
            line_separator: LINE_SEPARATOR.to_string(),
        }
    }
}

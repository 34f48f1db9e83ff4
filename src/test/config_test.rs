#[cfg(test)]
mod tests {
    use std::{
        env,
        sync::{Mutex, OnceLock},
    };

    use crate::domain::ports::config::{AppConfig, DEFAULT_SENTINEL, LINE_SEPARATOR};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env<'a>() -> std::sync::MutexGuard<'a, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("lock poisoned")
    }

    fn clear_env() {
        unsafe {
            env::remove_var("NO_COLOR");
            env::remove_var("FILEMANAGER_NO_COLOR");
            env::remove_var("FILEMANAGER_SENTINEL");
        }
    }

    #[test]
    fn default_config_is_environment_free() {
        let config = AppConfig::default();
        assert_eq!(config.sentinel, DEFAULT_SENTINEL);
        assert_eq!(config.line_separator, LINE_SEPARATOR);
        assert!(config.color);
    }

    #[test]
    fn no_color_disables_styling() {
        let _guard = lock_env();
        clear_env();

        unsafe {
            env::set_var("NO_COLOR", "1");
        }
        assert!(!AppConfig::new().color);

        clear_env();
        unsafe {
            env::set_var("FILEMANAGER_NO_COLOR", "false");
        }
        assert!(AppConfig::new().color);

        unsafe {
            env::set_var("FILEMANAGER_NO_COLOR", "1");
        }
        assert!(!AppConfig::new().color);

        clear_env();
    }

    #[test]
    fn sentinel_can_be_overridden() {
        let _guard = lock_env();
        clear_env();

        unsafe {
            env::set_var("FILEMANAGER_SENTINEL", " EOF ");
        }
        assert_eq!(AppConfig::new().sentinel, "EOF");

        unsafe {
            env::set_var("FILEMANAGER_SENTINEL", "   ");
        }
        assert_eq!(AppConfig::new().sentinel, DEFAULT_SENTINEL);

        clear_env();
    }
}

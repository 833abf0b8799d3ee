
use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe { env::remove_var(key) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by KANBAN_CONFIG_DIR, with every other
/// KANBAN_* override cleared for the lifetime of the returned guards.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap()),
        EnvGuard::remove("KANBAN_API_BASE_URL"),
        EnvGuard::remove("KANBAN_LOG_LEVEL"),
        EnvGuard::remove("KANBAN_LOG_COLORED"),
        EnvGuard::remove("KANBAN_LOG_DIR"),
        EnvGuard::remove("KANBAN_LOG_FILE"),
    ];
    (temp, guards)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}

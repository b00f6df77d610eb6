//! User configuration: XDG paths and `settings.conf`.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir};
pub use settings::{Settings, load_settings, parse_settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "folio";

/// What: Locate an existing `settings.conf`.
///
/// Inputs: none
///
/// Output: First existing file among `$HOME/.config/folio/settings.conf` and
/// `$XDG_CONFIG_HOME/folio/settings.conf`; `None` when neither exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .map(|h| Path::new(&h).join(".config"));
    let xdg = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|x| !x.trim().is_empty())
        .map(PathBuf::from);
    [home, xdg]
        .into_iter()
        .flatten()
        .map(|base| base.join(APP_DIR).join("settings.conf"))
        .find(|p| p.is_file())
}

/// Base directory holding per-application config directories.
///
/// `$HOME/.config` when HOME is set, else `$XDG_CONFIG_HOME`, else the working directory.
fn config_base() -> PathBuf {
    let non_empty = |var: &str| env::var(var).ok().filter(|v| !v.trim().is_empty());
    non_empty("HOME")
        .map(|h| Path::new(&h).join(".config"))
        .or_else(|| non_empty("XDG_CONFIG_HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// folio's config directory, created on first use.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = config_base().join(APP_DIR);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "cannot create config directory");
    }
    dir
}

/// Log directory `<config_dir>/logs`, created on first use.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "cannot create log directory");
    }
    dir
}

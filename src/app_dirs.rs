use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "tugmath";

/// Where tugmath keeps its files on this machine
pub struct AppDirs;

impl AppDirs {
    /// `~/.local/state/tugmath/tugmath.log`, or the platform's local data dir
    /// when `HOME` is unset
    pub fn log_path() -> Option<PathBuf> {
        let dir = match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".local/state").join(APP_NAME),
            None => Self::project()?.data_local_dir().to_path_buf(),
        };
        Some(dir.join(format!("{APP_NAME}.log")))
    }

    /// `config.json` in the platform config dir, falling back to the working dir
    pub fn config_path() -> PathBuf {
        match Self::project() {
            Some(pd) => pd.config_dir().join("config.json"),
            None => PathBuf::from(format!("{APP_NAME}_config.json")),
        }
    }

    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_named_for_the_app() {
        if let Some(log) = AppDirs::log_path() {
            assert!(log.ends_with("tugmath/tugmath.log"));
        }
        assert!(AppDirs::config_path()
            .to_string_lossy()
            .contains("config.json"));
    }
}

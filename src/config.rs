use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk defaults, loaded only when `--config` names a file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// PAC source used when `--pac-file` is not given.
    pub pac_file: String,
}

impl ToolConfig {
    pub fn load(path: &Path) -> Result<Self, confy::ConfyError> {
        confy::load_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        let path = std::env::temp_dir().join(format!(
            "pacfind_config_defaults_{}.toml",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();

        let config = ToolConfig::load(&path).expect("Missing config should load as defaults");
        assert_eq!(config.pac_file, "");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_config_pac_source() {
        let path = std::env::temp_dir().join(format!(
            "pacfind_config_source_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "pac_file = \"/etc/proxy.pac\"\n").expect("Failed to write config");

        let config = ToolConfig::load(&path).expect("Config should load");
        assert_eq!(config.pac_file, "/etc/proxy.pac");

        std::fs::remove_file(&path).ok();
    }
}

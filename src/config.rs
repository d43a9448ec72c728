use std::path::PathBuf;

use shuttle_runtime::SecretStore;

const DEFAULT_TITLE: &str = "Calculadora de Conta";
const DEFAULT_ASSETS_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub page_title: String,
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_title: DEFAULT_TITLE.to_owned(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl AppConfig {
    /// Reads `PAGE_TITLE` and `ASSETS_DIR`, keeping the defaults for absent keys.
    pub fn from_secrets(secret_store: &SecretStore) -> Self {
        Self::from_lookup(|key| secret_store.get(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            page_title: lookup("PAGE_TITLE")
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.page_title),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
        }
    }
}

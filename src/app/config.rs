use std::env;
use std::path::PathBuf;

use log::warn;

const OUT_PATH_VAR: &str = "SYLVAIRE_LOGO_OUT";
const DEFAULT_OUT_PATH: &str = "alliance-logo.svg";

pub struct AppConfig {
    /// Where the save collaborator writes the serialized logo
    pub out_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let out_path = match env::var(OUT_PATH_VAR) {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                warn!(
                    "{} not set, defaulting to {}",
                    OUT_PATH_VAR, DEFAULT_OUT_PATH
                );
                PathBuf::from(DEFAULT_OUT_PATH)
            }
        };
        AppConfig { out_path }
    }
}

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{ConfigError, InvoiceConfig};

const CONFIG_DIR_NAME: &str = "klakie";
const HOME_ENV_VAR: &str = "KLAKIE_HOME";
const CONFIG_FILE_NAME: &str = "invoice_config.json";
const TMP_SUFFIX: &str = "tmp";

/// Loads and saves [`InvoiceConfig`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE_NAME)))
    }

    /// Points at `$KLAKIE_HOME/invoice_config.json` when set, otherwise at
    /// `<config dir>/klakie/invoice_config.json`.
    pub fn default_location() -> Self {
        if let Some(custom) = env::var_os(HOME_ENV_VAR) {
            return Self::new(PathBuf::from(custom).join(CONFIG_FILE_NAME));
        }
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the stored record, or the defaults when nothing has been saved yet.
    pub fn load(&self) -> Result<InvoiceConfig, ConfigError> {
        if !self.config_path.exists() {
            return Ok(InvoiceConfig::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        serde_json::from_str(&data).map_err(|err| self.serde_error(err))
    }

    pub fn save(&self, config: &InvoiceConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config).map_err(|err| self.serde_error(err))?;
        let tmp = tmp_path(&self.config_path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }

    fn serde_error(&self, err: serde_json::Error) -> ConfigError {
        ConfigError::Serde {
            path: self.config_path.clone(),
            message: err.to_string(),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

use crate::{ConfigError, ConfigErrorResult};

use std::collections::HashMap;
use std::path::Path;

use log::debug;

/// Environment lookups backed by the process environment, falling back to
/// the values of an env file. The process environment always wins and the
/// file is never written into it.
pub(crate) struct EnvSource {
    file_vars: HashMap<String, String>,
}

impl EnvSource {
    pub(crate) fn process_only() -> Self {
        Self {
            file_vars: HashMap::new(),
        }
    }

    /// A missing file is not an error; a malformed one is.
    pub(crate) fn with_file(path: &Path) -> ConfigErrorResult<Self> {
        if !path.exists() {
            debug!("No env file at {}", path.display());
            return Ok(Self::process_only());
        }

        let to_error = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut file_vars = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(to_error)? {
            let (key, value) = item.map_err(to_error)?;
            file_vars.insert(key, value);
        }

        debug!("Read {} variables from {}", file_vars.len(), path.display());
        Ok(Self { file_vars })
    }

    pub(crate) fn get(&self, name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .or_else(|| self.file_vars.get(name).cloned())
    }

    pub(crate) fn apply_string(&self, name: &str, target: &mut String) {
        if let Some(val) = self.get(name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    pub(crate) fn apply_bool(&self, name: &str, target: &mut bool) {
        if let Some(val) = self.get(name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    pub(crate) fn apply_parse<T: std::str::FromStr>(&self, name: &str, target: &mut T) {
        if let Some(val) = self.get(name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    pub(crate) fn apply_option_string(&self, name: &str, target: &mut Option<String>) {
        if let Some(val) = self.get(name) {
            *target = Some(val);
        }
    }
}

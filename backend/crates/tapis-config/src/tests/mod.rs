mod validation;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
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

/// Isolated config directory plus an env-file path inside it.
/// The Tapis variables are cleared so the host environment cannot leak in.
pub(crate) struct TestEnv {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn env_file_path(&self) -> std::path::PathBuf {
        self.temp.path().join(".env.tapis")
    }

    pub(crate) fn write_config(&self, toml: &str) {
        std::fs::write(self.temp.path().join("config.toml"), toml).unwrap();
    }

    pub(crate) fn write_env_file(&self, contents: &str) {
        std::fs::write(self.env_file_path(), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let temp = TempDir::new().unwrap();
    let env_file = temp.path().join(".env.tapis");
    let guards = vec![
        EnvGuard::set("TAPIS_BRIDGE_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::set("TAPIS_BRIDGE_ENV_FILE", env_file.to_str().unwrap()),
        EnvGuard::remove("TAPIS_BASE_URL"),
        EnvGuard::remove("TAPIS_AUTH_ENDPOINT"),
        EnvGuard::remove("TAPIS_BRIDGE_JWT_SECRET"),
    ];
    TestEnv {
        temp,
        _guards: guards,
    }
}

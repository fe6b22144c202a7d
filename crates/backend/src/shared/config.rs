use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Env var that overrides `[directory_api] base_url`.
pub const BASE_URL_ENV: &str = "DIRECTORY_API_BASE_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub directory_api: DirectoryApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Compiled frontend (trunk `dist`), served as the fallback route.
    pub frontend_dist: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DirectoryApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub device_id: String,
    pub device_type: String,
    pub version_number: String,
    pub application_source: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
frontend_dist = "dist"

[directory_api]
base_url = "http://localhost:8080/api/v2"
timeout_secs = 30
device_id = "00000001-e89b-12d3-a456-426614174000"
device_type = "web"
version_number = "30.5.4"
application_source = "q84sale"
"#;

/// Reads `config.toml` from the executable's directory, falling back to the
/// embedded defaults. `DIRECTORY_API_BASE_URL` wins over both.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match exe_dir().map(|dir| dir.join("config.toml")) {
        Some(path) if path.is_file() => {
            tracing::info!("Loading config from {}", path.display());
            parse(&std::fs::read_to_string(&path)?)?
        }
        other => {
            if let Some(path) = other {
                tracing::warn!("No config at {}, using built-in defaults", path.display());
            }
            parse(DEFAULT_CONFIG)?
        }
    };
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        apply_base_url_override(&mut config, &base_url);
    }
    tracing::info!("Directory API: {}", config.directory_api.base_url);
    Ok(config)
}

fn parse(contents: &str) -> anyhow::Result<Config> {
    toml::from_str(contents).map_err(|e| anyhow::anyhow!("Invalid config.toml: {}", e))
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

fn apply_base_url_override(config: &mut Config, base_url: &str) {
    let base_url = base_url.trim().trim_end_matches('/');
    if !base_url.is_empty() {
        config.directory_api.base_url = base_url.to_string();
    }
}

/// `frontend_dist` as given when absolute; otherwise next to the executable
/// if it exists there, else relative to the working directory.
pub fn get_frontend_dist(config: &Config) -> PathBuf {
    let dist = Path::new(&config.server.frontend_dist);
    if dist.is_absolute() {
        return dist.to_path_buf();
    }
    exe_dir()
        .map(|dir| dir.join(dist))
        .filter(|p| p.exists())
        .unwrap_or_else(|| dist.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.directory_api.base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.directory_api.timeout_secs, 30);
        assert_eq!(config.directory_api.device_type, "web");
    }

    #[test]
    fn test_base_url_override() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();

        apply_base_url_override(&mut config, "  ");
        assert_eq!(config.directory_api.base_url, "http://localhost:8080/api/v2");

        apply_base_url_override(&mut config, "https://api.example.com/api/v2/");
        assert_eq!(config.directory_api.base_url, "https://api.example.com/api/v2");
    }

    #[test]
    fn test_absolute_dist_kept() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("directory-dist");
        config.server.frontend_dist = abs.to_string_lossy().into_owned();
        assert_eq!(get_frontend_dist(&config), abs);
    }
}

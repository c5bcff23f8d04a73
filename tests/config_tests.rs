use persona_lens::config::{self, Config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
llm:
  api_key: "file-key"
  model: "gemini-2.5-pro"
photos:
  access_key: "photo-key"
  timeout_secs: 5
"#;

#[tokio::test]
async fn test_load_file_reads_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, SAMPLE_CONFIG_YAML).await.unwrap();

    let config = config::load_file(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.llm.api_key, "file-key");
    assert_eq!(config.llm.model, "gemini-2.5-pro");
    // Unset keys keep their defaults
    assert_eq!(
        config.llm.base_url,
        "https://generativelanguage.googleapis.com/v1beta/openai"
    );
    assert_eq!(config.photos.access_key.as_deref(), Some("photo-key"));
    assert_eq!(config.photos.timeout_secs, 5);
    assert_eq!(config.photos.base_url, "https://api.unsplash.com");
}

#[tokio::test]
async fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = config::load_file(dir.path().join("absent.yaml")).await.unwrap();

    assert_eq!(config.server.port, Config::default().server.port);
    assert!(config.llm.api_key.is_empty());
}

#[tokio::test]
async fn test_invalid_yaml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, "server: [not, a, map").await.unwrap();

    assert!(config::load_file(&path).await.is_err());
}

#[tokio::test]
async fn test_env_override_takes_precedence_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, SAMPLE_CONFIG_YAML).await.unwrap();

    let mut config = config::load_file(&path).await.unwrap();
    config::apply_env_overrides(&mut config, |key| match key {
        "GEMINI_API_KEY" => Some("env-key".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.photos.access_key.as_deref(), Some("photo-key"));
    assert!(config::validate(&config).is_ok());
}

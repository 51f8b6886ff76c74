//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the terminal client.
pub struct ClientConfig {
    /// Origin serving `/api/suppliers/...`, e.g. `http://localhost:5000`.
    pub api_base_url: String,
    /// Route the history starts from, so that cancel has somewhere to return.
    #[serde(default = "default_app_base_path")]
    pub app_base_path: String,
}

fn default_app_base_path() -> String {
    "/suppliers".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::{Config, File, FileFormat};

    #[test]
    fn loads_from_yaml_with_defaults() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_base_url: http://localhost:5000",
                FileFormat::Yaml,
            ))
            .build()
            .unwrap();

        let config: ClientConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.app_base_path, "/suppliers");
    }
}

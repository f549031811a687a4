use config::{ConfigError, Map, Source, Value, ValueKind};
use std::env;

const ENV_PREFIX: &str = "ranger--";
const ENV_SEPARATOR: &str = "--";
const ENV_URI: &str = "environment";

/// Configuration source reading the `RANGER--` prefixed environment variables.
///
/// The `--` separator selects the nesting level and each `SNAKE_CASE` segment is converted into a `camelCase` key,
/// thus `RANGER--PERSON_SEARCH--ETHOS--API_KEY` sets `personSearch.ethos.apiKey`.
/// Values are always strings, serde performs the conversion on deserialization.
#[derive(Debug, Clone, Default)]
pub struct Environment {}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    fn convert_key_case(key: &str) -> String {
        key.split('_')
            .enumerate()
            .map(|(i, s)| {
                if i == 0 {
                    s.to_lowercase()
                } else {
                    let mut chars = s.chars();
                    chars
                        .next()
                        .map(|c| c.to_uppercase().collect::<String>())
                        .unwrap_or_default()
                        + &chars.as_str().to_lowercase()
                }
            })
            .collect()
    }

    fn convert_key(env_key: &str) -> Option<String> {
        let key = env_key.to_lowercase();
        let key = key.strip_prefix(ENV_PREFIX)?;
        Some(
            key.split(ENV_SEPARATOR)
                .map(Self::convert_key_case)
                .collect::<Vec<_>>()
                .join("."),
        )
    }
}

impl Source for Environment {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let uri = ENV_URI.to_string();
        let mut m = Map::new();

        for (env_key, value) in env::vars() {
            if let Some(key) = Self::convert_key(&env_key) {
                log::debug!("Reading env {env_key} as {key}...");
                m.insert(key, Value::new(Some(&uri), ValueKind::String(value)));
            }
        }

        Ok(m)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ranger_test::test;

    #[test]
    fn keys_are_converted_to_camel_case_path() {
        assert_eq!(
            Environment::convert_key("RANGER--PERSON_SEARCH--ETHOS--API_KEY").as_deref(),
            Some("personSearch.ethos.apiKey")
        );
        assert_eq!(
            Environment::convert_key("RANGER--SERVICE--JWT_SECRET").as_deref(),
            Some("service.jwtSecret")
        );
        assert_eq!(Environment::convert_key("PATH"), None);
    }
}

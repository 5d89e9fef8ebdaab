//! Loader for Storelens configuration with YAML + environment overlays.
//!
//! Every field carries a default, so the service boots with no file and no
//! environment at all. Precedence when sources are present: defaults < file
//! < `STORELENS_`-prefixed environment variables. `${VAR}` placeholders in
//! string values are expanded recursively with a depth cap.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorelensConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub outreach: OutreachConfig,
}

/// Bind address for the web server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port", deserialize_with = "lenient_number")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Outbound page-fetch tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Total per-request timeout in seconds.
    #[serde(default = "default_timeout_secs", deserialize_with = "lenient_number")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Identity substituted into the rendered outreach message.
#[derive(Debug, Clone, Deserialize)]
pub struct OutreachConfig {
    #[serde(default = "default_agency_name")]
    pub agency_name: String,
    #[serde(default = "default_contact_person")]
    pub contact_person: String,
    #[serde(default = "default_scheduling_link")]
    pub scheduling_link: String,
}

impl Default for OutreachConfig {
    fn default() -> Self {
        Self {
            agency_name: default_agency_name(),
            contact_person: default_contact_person(),
            scheduling_link: default_scheduling_link(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5000
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_agency_name() -> String {
    "DataFashion Marketing".into()
}
fn default_contact_person() -> String {
    "Time de Marketing".into()
}
fn default_scheduling_link() -> String {
    "calendly.com/datafashion/15min".into()
}

/// Environment variables arrive as strings; accept both `5000` and `"5000"`.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<T> {
        Number(T),
        String(String),
    }

    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct StorelensConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for StorelensConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StorelensConfigLoader {
    /// Start with sensible defaults: optional YAML file + `STORELENS_` env overrides.
    ///
    /// ```
    /// use storelens_config::StorelensConfigLoader;
    ///
    /// let config = StorelensConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.server.port, 5000);
    /// assert_eq!(config.fetch.timeout_secs, 10);
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("STORELENS").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    ///
    /// The file is optional so headless deployments can rely purely on
    /// defaults and environment variables.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use storelens_config::StorelensConfigLoader;
    ///
    /// let cfg = StorelensConfigLoader::new()
    ///     .with_yaml_str("server:\n  host: \"127.0.0.1\"\n  port: 8080")
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.server.host, "127.0.0.1");
    /// assert_eq!(cfg.server.port, 8080);
    /// assert_eq!(cfg.outreach.agency_name, "DataFashion Marketing");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly typed config.
    ///
    /// The loader combines YAML snippets with `STORELENS_`-prefixed environment
    /// variables and expands `${VAR}` placeholders before materialising the
    /// typed structs.
    ///
    /// ```
    /// use storelens_config::StorelensConfigLoader;
    ///
    /// unsafe { std::env::set_var("BOOKING_URL", "calendly.com/acme/intro"); }
    ///
    /// let config = StorelensConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// outreach:
    ///   agency_name: "Acme Digital"
    ///   scheduling_link: "${BOOKING_URL}"
    /// "#,
    ///     )
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.outreach.agency_name, "Acme Digital");
    /// assert_eq!(config.outreach.scheduling_link, "calendly.com/acme/intro");
    ///
    /// unsafe { std::env::remove_var("BOOKING_URL"); }
    /// ```
    pub fn load(self) -> Result<StorelensConfig, ConfigError> {
        let cfg = self.builder.build()?;

        // Convert to serde_json::Value first
        let mut v: Value = cfg.try_deserialize()?;
        // Recursively expand environment variables
        expand_env_in_value(&mut v);

        // Deserialize into the strongly-typed config
        let typed: StorelensConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use temp_env;

    #[test]
    fn expands_placeholders_in_strings() {
        temp_env::with_var("BOOKING_SLUG", Some("acme/15min"), || {
            let mut v = json!("calendly.com/${BOOKING_SLUG}");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("calendly.com/acme/15min"));
        });
    }

    #[test]
    fn expands_in_nested_object() {
        temp_env::with_var("AGENCY", Some("Acme"), || {
            let mut v = json!({ "outreach": { "agency_name": "${AGENCY} Digital" } });
            expand_env_in_value(&mut v);
            assert_eq!(v, json!({ "outreach": { "agency_name": "Acme Digital" } }));
        });
    }

    #[test]
    fn expansion_follows_references_between_env_values() {
        temp_env::with_vars(
            [
                ("BOOKING_HOST", Some("calendly.com")),
                ("BOOKING_BASE", Some("${BOOKING_HOST}/acme")),
                ("BOOKING_URL", Some("${BOOKING_BASE}/15min")),
            ],
            || {
                let mut v = json!({ "scheduling_link": "${BOOKING_URL}" });
                expand_env_in_value(&mut v);
                assert_eq!(v, json!({ "scheduling_link": "calendly.com/acme/15min" }));
            },
        );
    }

    #[test]
    fn self_referencing_vars_terminate() {
        temp_env::with_vars([("PING", Some("${PONG}")), ("PONG", Some("${PING}"))], || {
            let mut v = json!("link=${PING}");
            expand_env_in_value(&mut v);
            // The depth cap stops the chase; the placeholder survives.
            let s = v.as_str().unwrap();
            assert!(s.starts_with("link="));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unset_vars_stay_as_placeholders() {
        let mut v = json!("agenda-${STORELENS_NAO_DEFINIDA}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("agenda-${STORELENS_NAO_DEFINIDA}"));
    }

    #[test]
    fn numbers_accepted_as_strings() {
        let cfg = StorelensConfigLoader::new()
            .with_yaml_str("server:\n  port: \"8123\"\nfetch:\n  timeout_secs: \"3\"")
            .load()
            .unwrap();
        assert_eq!(cfg.server.port, 8123);
        assert_eq!(cfg.fetch.timeout_secs, 3);
    }

    #[test]
    fn file_overrides_defaults_but_keeps_the_rest() {
        let cfg = StorelensConfigLoader::new()
            .with_yaml_str("fetch:\n  timeout_secs: 2")
            .load()
            .unwrap();
        assert_eq!(cfg.fetch.timeout_secs, 2);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.outreach.contact_person, "Time de Marketing");
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

pub const EMBEDDED_CONFIG: &str = include_str!("../content/site.toml");

// site configuration
//
// everything about the site that is not catalog content: who it belongs to, how long the
// transient ui pieces last, and where contact messages go
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub owner: OwnerConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OwnerConfig {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub year: u16,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    // how long the simulated transport pretends to take
    pub submit_delay_ms: u64,
    // how long a toast stays up before dismissing itself
    pub toast_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            submit_delay_ms: 1500,
            toast_ms: 4000,
        }
    }
}

impl TimingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // scroll offset past which the navbar condenses
    pub condense_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            condense_threshold_px: 50.0,
        }
    }
}

// backends
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(tag = "transport")]
pub enum ContactConfig {
    // fixed delay, always succeeds
    #[default]
    Simulated,
    // POST to an external contact service
    Http { endpoint_root: String },
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

impl SiteConfig {
    pub fn embedded() -> anyhow::Result<Self> {
        SiteConfig::from_toml(EMBEDDED_CONFIG)
    }

    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        debug!("parsing site config");

        let data: TomlConfigFile = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse config: {err}")))?;

        let config = data.config;

        let threshold = config.nav.condense_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(anyhow::Error::msg(format!(
                "nav.condense_threshold_px must be a finite, non-negative number (got {threshold})"
            )));
        }

        if let ContactConfig::Http { endpoint_root } = &config.contact {
            if endpoint_root.trim().is_empty() {
                return Err(anyhow::Error::msg("contact.endpoint_root is empty"));
            }
        }

        debug!("successfully parsed site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[config.owner]
name = "Ada"
initials = "AL"
role = "Engineer"
bio = "bio"
email = "ada@example.com"
year = 2026
"#;

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::embedded().unwrap();

        assert_eq!(config.owner.initials, "DK");
        assert_eq!(config.timing.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.timing.toast(), Duration::from_secs(4));
        assert_eq!(config.nav.condense_threshold_px, 50.0);
        assert_eq!(config.contact, ContactConfig::Simulated);
    }

    #[test]
    fn missing_tables_take_defaults() {
        let config = SiteConfig::from_toml(MINIMAL).unwrap();

        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.nav, NavConfig::default());
        assert_eq!(config.contact, ContactConfig::Simulated);
        assert_eq!(config.owner.github_url, None);
    }

    #[test]
    fn http_transport() {
        let doc = format!(
            "{MINIMAL}\n[config.contact]\ntransport = \"Http\"\nendpoint_root = \"https://mail.example.com/api\"\n"
        );

        let config = SiteConfig::from_toml(&doc).unwrap();
        assert_eq!(
            config.contact,
            ContactConfig::Http {
                endpoint_root: String::from("https://mail.example.com/api")
            }
        );
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let doc = format!("{MINIMAL}\n[config.contact]\ntransport = \"Http\"\nendpoint_root = \" \"\n");

        assert!(SiteConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn nan_threshold_is_rejected() {
        for value in ["nan", "inf", "-inf", "-1.0"] {
            let doc = format!("{MINIMAL}\n[config.nav]\ncondense_threshold_px = {value}\n");

            let err = SiteConfig::from_toml(&doc).unwrap_err();
            assert!(
                err.to_string().starts_with("nav.condense_threshold_px"),
                "{value}"
            );
        }
    }

    #[test]
    fn missing_owner_is_rejected() {
        let err = SiteConfig::from_toml("[config.timing]\ntoast_ms = 10\n").unwrap_err();

        assert!(err.to_string().starts_with("failed to parse config"));
    }
}

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::models::artwork::{default_artworks, Artwork};

const DEFAULT_CONFIG_PATH: &str = "site.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SnsLink {
    pub label: String,
    pub url: String,
}

/// Outgoing mail for the contact bridge.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MailSettings {
    /// Recipient of every contact message.
    pub to: String,
    /// Sender address. Falls back to `smtp_username` when empty.
    pub from: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        MailSettings {
            to: String::new(),
            from: String::new(),
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

impl MailSettings {
    pub fn is_configured(&self) -> bool {
        !self.to.is_empty() && !self.smtp_host.is_empty() && !self.smtp_username.is_empty()
    }

    pub fn sender(&self) -> &str {
        if self.from.is_empty() {
            &self.smtp_username
        } else {
            &self.from
        }
    }
}

/// Site configuration read from `site.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// File path or http(s) URL of the news JSON.
    pub news_source: String,
    /// Directory served under `/assets`.
    pub assets_dir: String,
    /// Header background on the top page.
    pub hero_image: String,
    pub nav: Vec<NavLink>,
    pub sns: Vec<SnsLink>,
    pub artworks: Vec<Artwork>,
    pub mail: MailSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let link = |label: &str, href: &str| NavLink {
            label: label.to_string(),
            href: href.to_string(),
        };
        SiteConfig {
            site_name: "Portfolio".to_string(),
            news_source: "assets/json/data.json".to_string(),
            assets_dir: "assets".to_string(),
            hero_image: "/assets/img/top/img_2022-11-26-16-13-37.jpg".to_string(),
            nav: vec![
                link("TOP", "index.html"),
                link("NEWS", "/news"),
                link("MASTERPIECE", "/masterpiece"),
                link("CONTACT", "/contact"),
            ],
            sns: Vec::new(),
            artworks: default_artworks(),
            mail: MailSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Load from `$FOLIO_CONFIG` or `./site.toml`. A missing file yields the
    /// defaults; a file that exists but does not parse is an error.
    pub fn load() -> Result<Self, String> {
        let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = if Path::new(&path).exists() {
            info!("Loading site config from {}", path);
            Self::from_path(&path)?
        } else {
            warn!("{} not found, using default site config", path);
            SiteConfig::default()
        };

        if let Ok(password) = std::env::var("FOLIO_SMTP_PASSWORD") {
            config.mail.smtp_password = password;
        }
        Ok(config)
    }

    pub fn from_path(path: &str) -> Result<Self, String> {
        let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        Self::from_toml_str(&raw).map_err(|e| format!("{}: {}", path, e))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        let mut config: SiteConfig =
            toml::from_str(raw).map_err(|e| format!("Invalid site config: {}", e))?;
        if config.artworks.is_empty() {
            config.artworks = default_artworks();
        }
        Ok(config)
    }
}

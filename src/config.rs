use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{ReporterError, Result};

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub github: GitHubConfig,
    pub slack: SlackConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubConfig {
    pub owner: String,
    pub repo: String,
    pub token: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
    pub channel: String,
    #[serde(default = "default_icon_emoji")]
    pub icon_emoji: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_attachment_color")]
    pub attachment_color: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Open issues older than this many days count as stale.
    pub old_issue_days: i64,
    /// Issues closed within this many days count as recently closed.
    pub recent_closed_issue_days: i64,
    /// Cap on issue blocks rendered per message; the total is always shown.
    pub display_issue_max: usize,
    /// Upper bound on pages fetched per pagination chain.
    pub max_pages: u32,
    /// Joins assignee handles and label names inside a message.
    pub separator: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            old_issue_days: 60,
            recent_closed_issue_days: 1,
            display_issue_max: 50,
            max_pages: 50,
            separator: " ".to_string(),
        }
    }
}

fn default_icon_emoji() -> String {
    ":sunglasses:".to_string()
}

fn default_username() -> String {
    "issue-reporter".to_string()
}

fn default_attachment_color() -> String {
    "#7CD197".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Err(ReporterError::ConfigMissing(config_path));
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ReporterError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| ReporterError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "issue-reporter")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ReporterError::NoConfigDir)
    }

    /// Get GitHub token with env var taking precedence over config file
    pub fn github_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            return Ok(token);
        }

        self.github.token.clone().ok_or(ReporterError::MissingToken)
    }

    /// Get webhook URL with env var taking precedence, validated up front
    pub fn webhook_url(&self) -> Result<Url> {
        let raw = match std::env::var("SLACK_WEBHOOK_URL") {
            Ok(url) => url,
            Err(_) => self
                .slack
                .webhook_url
                .clone()
                .ok_or(ReporterError::MissingWebhookUrl)?,
        };

        Url::parse(&raw).map_err(|e| ReporterError::InvalidWebhookUrl {
            url: raw,
            source: e,
        })
    }
}

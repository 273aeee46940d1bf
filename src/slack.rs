//! Posts report messages to the incoming-webhook endpoint.

use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::Result;

pub struct SlackNotifier {
    http: Client,
    webhook_url: Url,
    channel: String,
    icon_emoji: String,
    username: String,
    attachment_color: String,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    attachments: Vec<Attachment<'a>>,
    channel: &'a str,
    icon_emoji: &'a str,
    /// 1 so @mentions in the text resolve to real names.
    link_names: u8,
    username: &'a str,
}

#[derive(Serialize)]
struct Attachment<'a> {
    color: &'a str,
    text: &'a str,
}

impl SlackNotifier {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            webhook_url: config.webhook_url()?,
            channel: config.slack.channel.clone(),
            icon_emoji: config.slack.icon_emoji.clone(),
            username: config.slack.username.clone(),
            attachment_color: config.slack.attachment_color.clone(),
        })
    }

    /// Post one message. The response body is ignored; a transport failure
    /// or non-2xx status propagates and aborts the run. No retries.
    pub async fn post(&self, text: &str) -> Result<()> {
        let payload = WebhookPayload {
            attachments: vec![Attachment {
                color: &self.attachment_color,
                text,
            }],
            channel: &self.channel,
            icon_emoji: &self.icon_emoji,
            link_names: 1,
            username: &self.username,
        };

        self.http
            .post(self.webhook_url.clone())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        debug!(channel = %self.channel, bytes = text.len(), "posted webhook message");
        Ok(())
    }
}

use crate::error::Result;
use crate::slack::SlackNotifier;

pub const TEST_MESSAGE: &str = "This is a test message from issue-reporter.";

/// Post a fixed string, bypassing the fetch/classify pipeline.
pub async fn run(notifier: &SlackNotifier) -> Result<()> {
    notifier.post(TEST_MESSAGE).await?;
    println!("Test message sent");
    Ok(())
}

// src/api/webhooks.rs — Outbound notice when a registration completes
//
// POSTs the registration details to the configured URL. Non-blocking
// (spawns a tokio task); delivery failures are logged and otherwise ignored.

use crate::desk::Registration;
use crate::util::truncate_str;

/// Fire the registration webhook if a URL is configured.
pub fn fire_registration(url: Option<&str>, registration: Registration) {
    let Some(url) = url.map(str::to_string) else {
        return;
    };

    tokio::spawn(async move {
        if let Err(e) = send_webhook(&url, &registration).await {
            tracing::warn!("Webhook delivery to {} failed: {}", url, e);
        }
    });
}

/// Send the webhook POST request.
async fn send_webhook(url: &str, registration: &Registration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let resp = client
        .post(url)
        .header("content-type", "application/json")
        .header(
            "user-agent",
            format!("frontdesk/{}", env!("CARGO_PKG_VERSION")),
        )
        .json(registration)
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(
            "Webhook returned HTTP {}: {}",
            status.as_u16(),
            truncate_str(&body, 200)
        );
    } else {
        tracing::debug!("Webhook delivered to {} (HTTP {})", url, status.as_u16());
    }

    Ok(())
}

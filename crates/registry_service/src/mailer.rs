//! Remote mail-dispatch function client.
//!
//! Delivery is fire-and-report: a success here means the function accepted
//! the message, not that a mailbox received it.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Clone)]
pub struct MailDispatcher {
    http: reqwest::Client,
    function_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DispatchPayload<'a> {
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    trainer_name: &'a str,
}

impl MailDispatcher {
    pub fn new(function_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            function_url: function_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
        trainer_name: &str,
    ) -> Result<()> {
        let mut request = self.http.post(&self.function_url).json(&DispatchPayload {
            to,
            subject,
            html,
            trainer_name,
        });
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        request
            .send()
            .await
            .context("Mail function unreachable")?
            .error_for_status()
            .context("Mail function reported an error")?;

        Ok(())
    }
}

/// Builds the HTML body for dispatch: user text is escaped first, then
/// newlines become `<br>`. Operator-edited bodies are untrusted input.
pub fn render_html_body(body: &str) -> String {
    escape_html(body).replace('\n', "<br>")
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(
            render_html_body("Dear colleague,\nWelcome aboard."),
            "Dear colleague,<br>Welcome aboard."
        );
    }

    #[test]
    fn markup_in_user_text_is_neutralized() {
        let html = render_html_body("<script>alert('x')</script>\n& more");
        assert_eq!(
            html,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;<br>&amp; more"
        );
    }
}

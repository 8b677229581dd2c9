use regex::{Captures, Regex};
use std::fmt;
use url::Url;

const REDACTED: &str = "[REDACTED]";

/// Masks node-provider credentials and mnemonics before they reach a log line or terminal
#[derive(Clone)]
pub struct SecretScrubber {
    url_pattern: Regex,
    mnemonic_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            // Provider keys usually live in the path (`/v2/<key>`) or the query string
            url_pattern: Regex::new(r#"(?i)\b[a-z][a-z0-9+.-]*://[^\s"'<>)]+"#)
                .expect("url pattern is valid"),
            // Match mnemonic fields in YAML, JSON and env assignments
            mnemonic_pattern: Regex::new(
                r#"(?i)(["']?(?:account_)?mnemonic["']?\s*[:=]\s*)(["']?)([a-z]+(?:[ \t]+[a-z]+)*)(["']?)"#,
            )
            .expect("mnemonic pattern is valid"),
        }
    }

    /// Keep scheme, host and port of a URL and hide everything else
    pub fn redact_url(&self, raw: &str) -> String {
        let Ok(url) = Url::parse(raw.trim()) else {
            return REDACTED.to_string();
        };
        let Some(host) = url.host_str() else {
            return REDACTED.to_string();
        };

        let mut redacted = format!("{}://{host}", url.scheme());
        if let Some(port) = url.port() {
            redacted = format!("{redacted}:{port}");
        }

        let has_secret_part = url.path() != "/"
            || url.query().is_some()
            || !url.username().is_empty()
            || url.password().is_some();
        if has_secret_part {
            redacted.push('/');
            redacted.push_str(REDACTED);
        }
        redacted
    }

    /// Replace a mnemonic with its word count
    pub fn redact_mnemonic(&self, phrase: &str) -> String {
        format!("[REDACTED {}-word mnemonic]", phrase.split_whitespace().count())
    }

    /// Scrub a free-form message of URLs and mnemonic assignments
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = self
            .url_pattern
            .replace_all(message, |caps: &Captures| self.redact_url(&caps[0]));
        self.mnemonic_pattern
            .replace_all(&scrubbed, |caps: &Captures| {
                format!("{}{}{REDACTED}{}", &caps[1], &caps[2], &caps[4])
            })
            .into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}

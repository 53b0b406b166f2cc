use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub payment: Option<PaymentInfo>,
    #[serde(default)]
    pub partnership: Option<String>,
    #[serde(default)]
    pub cta: Option<String>,
}

/// Payment details shown by the QR and UPI triggers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentInfo {
    #[serde(default)]
    pub title: Option<String>,
    pub account: String,
    pub upi_id: String,
    #[serde(default)]
    pub amount: Option<String>,
    /// Bullet lines listed under "About".
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Split leading `---` YAML frontmatter from the document body.
///
/// Documents without frontmatter, or with an unterminated block, are
/// returned whole with default metadata.
pub fn extract(content: &str) -> Result<(DeckMeta, String)> {
    let content = content.trim_start_matches('\u{feff}').replace("\r\n", "\n");
    let Some(rest) = content.strip_prefix("---\n") else {
        return Ok((DeckMeta::default(), content));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..].to_string();
            let meta = if yaml.trim().is_empty() {
                DeckMeta::default()
            } else {
                serde_yaml::from_str(yaml).context("Invalid deck frontmatter")?
            };
            return Ok((meta, body));
        }
        offset += line.len();
    }

    Ok((DeckMeta::default(), content))
}

//! Static site configuration: brand, contact address, theme and animation timings.
//!
//! The JSON file under `assets/` is compiled into the binary. Missing fields fall back
//! to the defaults below, malformed values are rejected by [`SiteConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

static EMBEDDED_CONFIG: &str = include_str!("../assets/site.json");

/// Longest animation we accept. Anything slower reads as a hang.
pub const MAX_DURATION_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub contact_email: String,
    pub copyright: String,
    pub theme: Theme,
    pub transitions: TransitionTimings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "transactivate_".to_string(),
            contact_email: "inquiries@transactivate.io".to_string(),
            copyright: "© 2026 TRANSACTIVATE. ALL RIGHTS RESERVED.".to_string(),
            theme: Theme::default(),
            transitions: TransitionTimings::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration compiled in from `assets/site.json`
    pub fn embedded() -> SiteResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Embedded configuration, or the defaults if it fails to load. The site always renders.
    pub fn load_or_default() -> Self {
        match Self::embedded() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Falling back to default site config: {}", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.brand.trim().is_empty() {
            return Err(SiteError::MissingField("brand"));
        }
        if !is_email(&self.contact_email) {
            return Err(SiteError::InvalidEmail(self.contact_email.clone()));
        }
        self.theme.validate()?;
        self.transitions.validate()
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

/// Color palette and font stacks. Rendered as CSS custom properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub navy: String,
    pub dark: String,
    pub light: String,
    pub accent: String,
    pub slate: String,
    pub card_overlay: String,
    pub font_sans: String,
    pub font_mono: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            navy: "#0a192f".to_string(),
            dark: "#020c1b".to_string(),
            light: "#112240".to_string(),
            accent: "#64ffda".to_string(),
            slate: "#8892b0".to_string(),
            card_overlay: "rgba(17, 34, 64, 0.6)".to_string(),
            font_sans: "Inter".to_string(),
            font_mono: "Fira Code".to_string(),
        }
    }
}

impl Theme {
    fn colors(&self) -> [(&'static str, &str); 6] {
        [
            ("navy", self.navy.as_str()),
            ("dark", self.dark.as_str()),
            ("light", self.light.as_str()),
            ("accent", self.accent.as_str()),
            ("slate", self.slate.as_str()),
            ("card_overlay", self.card_overlay.as_str()),
        ]
    }

    pub fn validate(&self) -> SiteResult<()> {
        for (field, value) in self.colors() {
            if !is_css_color(value) {
                return Err(SiteError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }
        if self.font_sans.trim().is_empty() {
            return Err(SiteError::MissingField("font_sans"));
        }
        if self.font_mono.trim().is_empty() {
            return Err(SiteError::MissingField("font_mono"));
        }
        Ok(())
    }

    /// `:root` block consumed by `assets/main.css`
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (field, value) in self.colors() {
            css.push_str(&format!("  --brand-{}: {};\n", field.replace('_', "-"), value));
        }
        css.push_str(&format!("  --font-sans: '{}', sans-serif;\n", self.font_sans));
        css.push_str(&format!("  --font-mono: '{}', monospace;\n", self.font_mono));
        css.push('}');
        css
    }
}

/// Animation lengths in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    pub fade_rise_ms: u32,
    pub slide_ms: u32,
    pub scale_ms: u32,
    pub disclosure_ms: u32,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            fade_rise_ms: 500,
            slide_ms: 400,
            scale_ms: 300,
            disclosure_ms: 300,
        }
    }
}

impl TransitionTimings {
    pub fn validate(&self) -> SiteResult<()> {
        let durations = [
            ("fade_rise_ms", self.fade_rise_ms),
            ("slide_ms", self.slide_ms),
            ("scale_ms", self.scale_ms),
            ("disclosure_ms", self.disclosure_ms),
        ];
        for (field, value) in durations {
            if value == 0 || value > MAX_DURATION_MS {
                return Err(SiteError::InvalidDuration { field, value });
            }
        }
        Ok(())
    }
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    ["rgb(", "rgba("]
        .into_iter()
        .any(|prefix| value.starts_with(prefix) && value.ends_with(')'))
}

use dioxus::prelude::*;

use crate::config::SiteConfig;

/// Site configuration from context, or the built-in defaults when no ancestor provides one
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

use std::fmt;

/// Content panels the site can display. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Landing,
    Buyers,
    Sellers,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Landing,
        Section::Buyers,
        Section::Sellers,
        Section::Faq,
        Section::Contact,
    ];

    /// Sections reachable from the nav bar. Landing is only reachable through the brand.
    pub const NAV: [Section; 4] = [
        Section::Buyers,
        Section::Sellers,
        Section::Faq,
        Section::Contact,
    ];

    /// Stable identifier used for element keys and ids
    pub fn slug(self) -> &'static str {
        match self {
            Section::Landing => "landing",
            Section::Buyers => "buyers",
            Section::Sellers => "sellers",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    /// Nav bar label, `None` for sections without a nav entry
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Section::Landing => None,
            Section::Buyers => Some("01. For Buyers"),
            Section::Sellers => Some("02. For Sellers"),
            Section::Faq => Some("03. FAQ"),
            Section::Contact => Some("04. Contact"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A static question/answer record shown in the FAQ panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub citations: &'static [&'static str],
}

/// Intent selector on the contact form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    #[default]
    BuySide,
    SellSide,
    General,
}

impl Intent {
    pub const ALL: [Intent; 3] = [Intent::BuySide, Intent::SellSide, Intent::General];

    pub fn value(self) -> &'static str {
        match self {
            Intent::BuySide => "buy",
            Intent::SellSide => "sell",
            Intent::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intent::BuySide => "Buy-Side (Acquire Authority)",
            Intent::SellSide => "Sell-Side (Liquidity Event)",
            Intent::General => "General Inquiry",
        }
    }

    /// Maps a `<select>` value back to an intent. Unknown values fall back to the default.
    pub fn from_value(value: &str) -> Self {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.value() == value)
            .unwrap_or_default()
    }
}

/// Contact form fields. Kept only while the contact panel is mounted, never sent anywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub entity_name: String,
    pub email: String,
    pub intent: Intent,
    pub message: String,
}

impl ContactDraft {
    pub fn is_blank(&self) -> bool {
        self.entity_name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.message.trim().is_empty()
    }
}

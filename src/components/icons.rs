use dioxus::prelude::*;

/// Stroke icons drawn on a 24x24 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Shield,
    ChevronRight,
    ChevronDown,
    Search,
    Activity,
    Briefcase,
    Mail,
    HelpCircle,
    GitBranch,
}

impl IconName {
    fn body(self) -> &'static str {
        match self {
            IconName::Shield => r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#,
            IconName::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            IconName::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            IconName::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            IconName::Activity => r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#,
            IconName::Briefcase => r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
            IconName::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            IconName::HelpCircle => r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#,
            IconName::GitBranch => r#"<line x1="6" x2="6" y1="3" y2="15"/><circle cx="18" cy="6" r="3"/><circle cx="6" cy="18" r="3"/><path d="M18 9a9 9 0 0 1-9 9"/>"#,
        }
    }

    pub fn svg(self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.body()
        )
    }
}

#[component]
pub fn Icon(name: IconName, #[props(default = 24)] size: u32, #[props(default)] class: String) -> Element {
    rsx! {
        span {
            class: "icon {class}",
            dangerous_inner_html: name.svg(size),
        }
    }
}

//! Site owner profile: the hero banner and about page content.

use serde::{Deserialize, Serialize};

use crate::block::ImageRef;
use crate::error::CoreError;

/// An outbound link on the about page (resume, social profiles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Open in a new tab with `noopener noreferrer`.
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    /// Short role label shown above the name in the hero.
    pub headline: String,
    pub tagline: String,
    /// About page paragraphs, in display order.
    #[serde(default)]
    pub about: Vec<String>,
    pub portrait: ImageRef,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl SiteProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Profile name must not be empty".into(),
            ));
        }
        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(CoreError::Validation(
                "Profile skills must not contain empty entries".into(),
            ));
        }
        for link in &self.links {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Profile link '{}' must have both a label and an href",
                    link.label
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn profile() -> SiteProfile {
        SiteProfile {
            name: "Ada".into(),
            headline: "Designer".into(),
            tagline: "Interfaces from research to code.".into(),
            about: vec!["First paragraph.".into()],
            portrait: ImageRef {
                src: "/images/about/me.jpg".into(),
                alt: "Ada".into(),
                w: None,
                h: None,
            },
            skills: vec!["UX/UI".into(), "Prototyping".into()],
            links: vec![SocialLink {
                label: "GitHub".into(),
                href: "https://github.com/example".into(),
                external: true,
            }],
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let p = SiteProfile {
            name: "  ".into(),
            ..profile()
        };
        assert_matches!(p.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn link_without_href_is_rejected() {
        let mut p = profile();
        p.links.push(SocialLink {
            label: "Resume".into(),
            href: String::new(),
            external: false,
        });
        assert_matches!(p.validate(), Err(CoreError::Validation(msg)) if msg.contains("Resume"));
    }

    #[test]
    fn blank_skill_is_rejected() {
        let mut p = profile();
        p.skills.push(" ".into());
        assert_matches!(p.validate(), Err(CoreError::Validation(_)));
    }
}

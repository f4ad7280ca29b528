use serde::{Deserialize, Serialize};

/// Portfolio copy bundled with the build.
pub const BUNDLED_PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Parse(String),
    Missing(&'static str),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Parse(msg) => write!(f, "portfolio content is not valid JSON: {msg}"),
            ContentError::Missing(field) => write!(f, "portfolio content is missing `{field}`"),
        }
    }
}

impl std::error::Error for ContentError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// A titled line in the education / experience timelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
}

/// An outbound link with an icon hint (`github`, `linkedin`, `twitter`, `mail`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

impl Link {
    /// `mailto:` links stay in the current tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    #[serde(default)]
    pub channels: Vec<Link>,
}

/// Copy for the under-development screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub headline: String,
    pub message: String,
    pub card_title: String,
    pub card_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub brand: String,
    pub owner: String,
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub portrait: Image,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_projects_url: Option<String>,
    pub contact: Contact,
    #[serde(default)]
    pub socials: Vec<Link>,
    pub placeholder: Placeholder,
}

impl Portfolio {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_PORTFOLIO_JSON)
    }

    /// Checks the fields every rendered page depends on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.owner.trim().is_empty() {
            return Err(ContentError::Missing("owner"));
        }
        if self.brand.trim().is_empty() {
            return Err(ContentError::Missing("brand"));
        }
        if self.about.paragraphs.is_empty() {
            return Err(ContentError::Missing("about.paragraphs"));
        }
        if self.skills.is_empty() {
            return Err(ContentError::Missing("skills"));
        }
        if self.projects.is_empty() {
            return Err(ContentError::Missing("projects"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentError, Link, Portfolio};
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_content_parses() {
        let p = Portfolio::bundled().unwrap();
        assert_eq!(p.owner, "John Doe");
        assert_eq!(p.skills.len(), 4);
        assert_eq!(p.projects.len(), 6);
        assert_eq!(p.about.education.len(), 2);
        assert_eq!(p.socials.len(), 4);
        assert!(p.skills.iter().all(|g| g.skills.len() == 5));
    }

    #[test]
    fn missing_required_copy_is_reported() {
        let mut p = Portfolio::bundled().unwrap();
        p.projects.clear();
        assert_eq!(p.validate(), Err(ContentError::Missing("projects")));
        p.owner = "  ".to_string();
        assert_eq!(p.validate(), Err(ContentError::Missing("owner")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Portfolio::from_json(r#"{"brand": 3}"#),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn external_links() {
        let link = |href: &str| Link {
            label: "x".to_string(),
            href: href.to_string(),
            icon: String::new(),
        };
        assert!(link("https://github.com").is_external());
        assert!(!link("mailto:hello@example.com").is_external());
        assert!(!link("#contact").is_external());
    }
}

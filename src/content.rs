use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";

static CONTENT: LazyLock<Result<PortfolioContent, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file missing: {0}")]
    Missing(&'static str),
    #[error("couldn't parse page content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub greeting: String,
    pub first_name: String,
    pub last_name: String,
    pub initials: String,
    pub bio: String,
    pub location: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: Vec<String>,
    pub description: String,
    pub icon: String,
    /// `#rrggbb`; the cards append alpha digits to it.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub credential_id: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub pitch: String,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub owner: Owner,
    pub phrases: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub contact: ContactDetails,
}

pub fn parse(raw: &[u8]) -> Result<PortfolioContent, ContentError> {
    Ok(serde_json::from_slice(raw)?)
}

fn load() -> Result<PortfolioContent, ContentError> {
    let file = Assets::get(CONTENT_FILE).ok_or(ContentError::Missing(CONTENT_FILE))?;
    parse(&file.data)
}

/// The page content, parsed once on first use.
pub fn content() -> Result<&'static PortfolioContent, &'static ContentError> {
    CONTENT.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = content().expect("embedded content should parse");
        assert!(!content.phrases.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.owner.initials.is_empty());
    }

    #[test]
    fn test_project_colors_are_hex() {
        let content = content().expect("embedded content should parse");
        for project in &content.projects {
            let hex = project
                .color
                .strip_prefix('#')
                .unwrap_or_else(|| panic!("{} color has no #", project.title));
            assert_eq!(hex.len(), 6, "{}", project.title);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_parse_error() {
        let err = parse(b"{\"owner\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_contact_links() {
        let contact = ContactDetails {
            email: "me@example.com".to_string(),
            phone: "+91 70135 27455".to_string(),
            linkedin: String::new(),
            pitch: String::new(),
        };
        assert_eq!(contact.mailto(), "mailto:me@example.com");
        assert_eq!(contact.tel(), "tel:+917013527455");
    }
}

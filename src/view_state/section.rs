use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the page's top-level anchors, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such section: {0}")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }

    /// The `id` attribute of the section element this entry scrolls to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let labels = Section::ALL.map(Section::label);
        assert_eq!(labels, ["About", "Skills", "Projects", "Resume", "Contact"]);
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_anchor_is_lowercase_label() {
        for section in Section::ALL {
            assert_eq!(section.anchor_id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(" resume ".parse::<Section>(), Ok(Section::Resume));
        assert_eq!(
            "Blog".parse::<Section>(),
            Err(UnknownSection("Blog".to_string()))
        );
    }
}

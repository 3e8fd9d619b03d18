use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::Color;

const BUILTIN: &str = include_str!("../../assets/content.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub badge: String,
    pub tagline: String,
    pub overview: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company_name: String,
    /// Logo URL, carried through as opaque content; the native page draws `icon_bg` only
    pub icon: String,
    pub icon_bg: Color,
    pub date: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tags: Vec<ProjectTag>,
    /// Preview image URL, carried through as opaque content and never fetched
    pub image: String,
    pub source_code_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    /// Opaque like [`Experience::icon`]
    pub icon: String,
    /// Top-left and bottom-right card colors
    pub gradient: [Color; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub accent: Color,
}

/// Everything the page shows that is not layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub code_snippets: Vec<String>,
}

impl PortfolioContent {
    /// Content compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN).context("parsing built-in content")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading content {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing content {}", path.display()))
    }

    /// `path` if given, otherwise the built-in content
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }
}

use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

const SITE_CONTENT_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteContent {
    pub profile: Profile,
    pub copy: SectionCopy,
    pub focus_areas: Vec<FocusArea>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub quote: String,
    pub avatar: String,
    pub avatar_alt: String,
    pub bio: String,
    pub location: String,
    pub hobby: String,
    pub copyright_year: u16,
}

/// Headings and button labels.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionCopy {
    pub about_heading: String,
    pub focus_heading: String,
    pub projects_heading: String,
    pub contact_heading: String,
    pub view_projects: String,
    pub contact_me: String,
    pub live_demo: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FocusArea {
    pub label: String,
    /// Color name; rendered as the `accent-<name>` class on the bullet.
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub live_url: String,
    pub thumbnail: Thumbnail,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thumbnail {
    /// CSS `background` value.
    pub gradient: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub profiles: Vec<ProfileLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

pub fn parse_site_content(raw: &str) -> Result<SiteContent, ContentError> {
    Ok(serde_json::from_str(raw)?)
}

/// Content embedded at build time, parsed on first access and shared for the
/// rest of the session.
pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    static SITE: OnceLock<Result<SiteContent, ContentError>> = OnceLock::new();

    SITE.get_or_init(|| parse_site_content(SITE_CONTENT_JSON))
        .as_ref()
}

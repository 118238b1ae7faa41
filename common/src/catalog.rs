use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PLACEHOLDER_LINK, icons::IconKey};

// the content shipped with the site, compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../content/catalog.toml");

// structs and types

// where a project's preview comes from
//
// the core never looks inside these, they are handed to the display layer as-is
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MediaRef {
    pub image: Option<String>,
    pub video: Option<String>,
}

impl MediaRef {
    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    // the still shown before playback, falling back to the video itself when the
    // catalog only has footage
    pub fn poster(&self) -> Option<&str> {
        self.image.as_deref().or(self.video.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    pub problem: String,
    pub solution: String,
    pub tech_stack: Vec<String>,
    pub impact: Vec<String>,
    #[serde(flatten)]
    pub media: MediaRef,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

impl ProjectRecord {
    pub fn demo_link(&self) -> &str {
        self.demo_url.as_deref().unwrap_or(PLACEHOLDER_LINK)
    }

    pub fn repo_link(&self) -> &str {
        self.repo_url.as_deref().unwrap_or(PLACEHOLDER_LINK)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SkillRecord {
    pub name: String,
    pub description: String,
    // percent, 0-100
    pub proficiency: u8,
    pub icon: IconKey,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TechCategory {
    #[serde(rename = "ML")]
    Ml,
    Web,
    Cloud,
    #[serde(rename = "DB")]
    Db,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TechRecord {
    pub name: String,
    pub category: TechCategory,
    pub icon_url: String,
}

// Catalog
//
// the read-only content of the site.  built once at startup and shared by reference
// with the view state, which only ever holds project ids into it
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Catalog {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    skills: Vec<SkillRecord>,
    #[serde(default)]
    tech: Vec<TechRecord>,
}

impl Catalog {
    pub fn embedded() -> anyhow::Result<Self> {
        Catalog::from_toml(EMBEDDED_CATALOG)
    }

    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse catalog: {err}")))?;

        catalog.validate()?;

        debug!(
            projects = catalog.projects.len(),
            skills = catalog.skills.len(),
            tech = catalog.tech.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut ids = HashSet::new();

        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(anyhow::Error::msg(format!(
                    "project \"{}\" has an empty id",
                    project.title
                )));
            }

            if !ids.insert(project.id.as_str()) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }

            if project.media.image.is_none() && project.media.video.is_none() {
                return Err(anyhow::Error::msg(format!(
                    "project {} has neither an image nor a video",
                    project.id
                )));
            }
        }

        for skill in &self.skills {
            if skill.proficiency > 100 {
                return Err(anyhow::Error::msg(format!(
                    "skill {} has proficiency {} (expected 0-100)",
                    skill.name, skill.proficiency
                )));
            }
        }

        Ok(())
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn tech(&self) -> &[TechRecord] {
        &self.tech
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // one project with footage, one with only a still
    pub(crate) const FIXTURE: &str = r#"
[[projects]]
id = "reel"
title = "Reel"
category = "Demo"
problem = "p"
solution = "s"
tech_stack = ["Rust"]
impact = ["fast"]
video = "/projects/reel.mp4"
repo_url = "https://example.com/reel"

[[projects]]
id = "still"
title = "Still"
category = "Demo"
problem = "p"
solution = "s"
tech_stack = []
impact = []
image = "/projects/still.png"
demo_url = "https://example.com/still"

[[skills]]
name = "Systems"
description = "d"
proficiency = 90
icon = "Cpu"
"#;

    pub(crate) fn fixture() -> Catalog {
        Catalog::from_toml(FIXTURE).unwrap()
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();

        assert_eq!(catalog.projects().len(), 5);
        assert_eq!(catalog.skills().len(), 4);
        assert_eq!(catalog.tech().len(), 10);
        assert!(catalog.project("veosense").is_some());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = fixture();

        assert_eq!(catalog.project("still").unwrap().title, "Still");
        assert!(catalog.project("missing").is_none());
    }

    #[test]
    fn missing_links_fall_back_to_placeholder() {
        let catalog = fixture();
        let reel = catalog.project("reel").unwrap();
        let still = catalog.project("still").unwrap();

        assert_eq!(reel.demo_link(), PLACEHOLDER_LINK);
        assert_eq!(reel.repo_link(), "https://example.com/reel");
        assert_eq!(still.demo_link(), "https://example.com/still");
        assert_eq!(still.repo_link(), PLACEHOLDER_LINK);
    }

    #[test]
    fn poster_prefers_image() {
        let both = MediaRef {
            image: Some(String::from("a.png")),
            video: Some(String::from("a.mp4")),
        };
        let footage = MediaRef {
            image: None,
            video: Some(String::from("b.mp4")),
        };

        assert_eq!(both.poster(), Some("a.png"));
        assert_eq!(footage.poster(), Some("b.mp4"));
        assert_eq!(MediaRef::default().poster(), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = format!("{FIXTURE}\n{}", &FIXTURE[..FIXTURE.find("[[projects]]\nid = \"still\"").unwrap()]);

        let err = Catalog::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate project id reel"));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let doc = FIXTURE.replace("icon = \"Cpu\"", "icon = \"Rocket\"");

        assert!(Catalog::from_toml(&doc).is_err());
    }

    #[test]
    fn proficiency_out_of_range_is_rejected() {
        let doc = FIXTURE.replace("proficiency = 90", "proficiency = 120");

        let err = Catalog::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("proficiency 120"));
    }

    #[test]
    fn project_without_media_is_rejected() {
        let doc = FIXTURE.replace("image = \"/projects/still.png\"\n", "");

        let err = Catalog::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("neither an image nor a video"));
    }
}

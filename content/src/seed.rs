//! Static seed content compiled into the crate.
//!
//! Used as the fallback when the backend cannot be reached. The document is
//! run through the same normalizers as network responses, so a broken seed
//! degrades to empty lists instead of failing.

use serde::Serialize;
use serde_json::Value;

use crate::models::{Blog, Experience, Project, Service, Skill, Testimonial};
use crate::normalize::Normalize;

const BUNDLED_SEED: &str = include_str!("../seed/portfolio.json");

/// Normalized content for every entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedContent {
    pub projects: Vec<Project>,
    pub blogs: Vec<Blog>,
    pub skills: Vec<Skill>,
    pub services: Vec<Service>,
    pub experience: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
}

impl SeedContent {
    /// The seed shipped with the crate.
    pub fn bundled() -> Self {
        match serde_json::from_str::<Value>(BUNDLED_SEED) {
            Ok(doc) => Self::from_value(&doc),
            Err(e) => {
                tracing::warn!(error = %e, "bundled seed content is not valid JSON");
                Self::default()
            }
        }
    }

    /// Build seed content from a document keyed by entity kind.
    ///
    /// Missing or malformed keys produce empty lists.
    pub fn from_value(doc: &Value) -> Self {
        let section = |key: &str| doc.get(key).unwrap_or(&Value::Null);
        Self {
            projects: Project::normalize_array(section("projects")),
            blogs: Blog::normalize_array(section("blogs")),
            skills: Skill::normalize_array(section("skills")),
            services: Service::normalize_array(section("services")),
            experience: Experience::normalize_array(section("experience")),
            testimonials: Testimonial::normalize_array(section("testimonials")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.blogs.is_empty()
            && self.skills.is_empty()
            && self.services.is_empty()
            && self.experience.is_empty()
            && self.testimonials.is_empty()
    }
}

//! Portfolio content model and its defensive ingestion boundary.
//!
//! Turns arbitrary JSON from the portfolio backend (or from bundled seed
//! data) into fully-populated, UI-safe records:
//! - [`coerce`]: total conversions of JSON values into strings, lists, ids
//! - [`normalize`]: one normalizer per entity kind plus array wrappers
//! - [`seed`]: static content used when the backend is unavailable

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod coerce;
pub mod models;
pub mod normalize;
pub mod seed;

pub use coerce::{is_truthy, to_safe_array, to_safe_id, to_safe_number, to_safe_string, to_string_list};
pub use models::{Blog, Experience, Project, Service, Skill, SkillItem, Testimonial};
pub use normalize::{
    DEFAULT_RATING, DEFAULT_SKILL_LEVEL, Normalize, fallback_id, normalize_blog,
    normalize_blog_array, normalize_experience, normalize_experience_array, normalize_project,
    normalize_project_array, normalize_service, normalize_service_array, normalize_skill,
    normalize_skill_array, normalize_skill_item, normalize_testimonial,
    normalize_testimonial_array,
};
pub use seed::SeedContent;

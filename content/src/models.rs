//! UI-safe content records.
//!
//! Every record produced by [`crate::normalize`] has all of its fields
//! populated. Field names serialize in camelCase so a record written back out
//! as JSON is accepted unchanged by its normalizer.

use serde::{Deserialize, Serialize};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    /// Problem statement shown on the case-study view.
    pub problem: String,
    pub solution: String,
    pub tech_stack: Vec<String>,
    pub thumbnail: String,
    pub video_preview: String,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
    pub is_published: bool,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    /// ISO-8601 timestamp as sent by the backend; not parsed.
    pub published_at: String,
    /// Human text such as `"5 min read"`.
    pub read_time: String,
    /// Display name of the author.
    pub author: String,
    pub is_published: bool,
}

/// A work-history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub is_published: bool,
}

/// A service offering with pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    /// Icon name resolved by the front-end icon set.
    pub icon: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
    pub price_note: String,
    pub popular: bool,
    pub is_published: bool,
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: String,
    /// Star rating, 1 through 5. Input is rounded, then clamped into range;
    /// missing, zero or non-numeric input becomes 5.
    pub rating: u8,
    pub is_published: bool,
}

/// A skill category with its individual skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Tailwind gradient classes, e.g. `from-blue-500 to-cyan-500`.
    pub color: String,
    pub description: String,
    pub items: Vec<SkillItem>,
    pub is_published: bool,
}

/// One skill inside a [`Skill`] category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    /// Proficiency percentage, 1 through 100. Input is rounded, then clamped
    /// into range; missing, zero or non-numeric input becomes 80.
    pub level: u8,
}

//! Per-entity normalizers.
//!
//! Each normalizer maps a raw document (or anything else, including `null`)
//! to a fully-populated record. Non-object input yields the entity's fallback
//! record with the id `"<kind>-fallback-<index>"`. The array wrappers never
//! drop elements: a list of N values always normalizes to N records.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::coerce::{document_id, is_truthy, to_safe_number, to_safe_string, to_string_list};
use crate::models::{Blog, Experience, Project, Service, Skill, SkillItem, Testimonial};

/// Level given to skill items that are bare strings or carry no usable level.
pub const DEFAULT_SKILL_LEVEL: u8 = 80;

/// Rating given to testimonials without a usable rating.
pub const DEFAULT_RATING: u8 = 5;

const DEFAULT_SKILL_COLOR: &str = "from-blue-500 to-cyan-500";

/// A JSON object as received from the backend.
pub type Document = Map<String, Value>;

/// A record type that can be built from an arbitrary JSON document.
pub trait Normalize: Sized {
    /// Entity kind used in fallback ids, e.g. `project`.
    const KIND: &'static str;

    /// The fully-defaulted record for position `index`.
    fn fallback(index: usize) -> Self;

    /// Build the record from a JSON object.
    fn from_document(doc: &Document, index: usize) -> Self;

    /// Normalize any JSON value.
    fn normalize(doc: &Value, index: usize) -> Self {
        match doc.as_object() {
            Some(doc) => Self::from_document(doc, index),
            None => Self::fallback(index),
        }
    }

    /// Normalize every element of a JSON array; non-arrays yield `[]`.
    fn normalize_array(data: &Value) -> Vec<Self> {
        match data {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| Self::normalize(item, index))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Placeholder id for a document without `_id`/`id`.
pub fn fallback_id(kind: &str, index: usize) -> String {
    format!("{kind}-fallback-{index}")
}

fn record_id<T: Normalize>(doc: &Document, index: usize) -> String {
    document_id(doc).unwrap_or_else(|| fallback_id(T::KIND, index))
}

fn text(doc: &Document, key: &str, fallback: &str) -> String {
    to_safe_string(doc.get(key), fallback)
}

fn list(doc: &Document, key: &str) -> Vec<String> {
    doc.get(key).map_or_else(Vec::new, to_string_list)
}

fn flag(doc: &Document, key: &str) -> bool {
    doc.get(key).is_some_and(is_truthy)
}

// Absence must not hide a record; only an explicit `false` does.
fn published(doc: &Document) -> bool {
    doc.get("isPublished") != Some(&Value::Bool(false))
}

// `Number(x) || fallback`, rounded and clamped into `min..=max`.
fn bounded(value: Option<&Value>, fallback: u8, min: u8, max: u8) -> u8 {
    match to_safe_number(value) {
        Some(n) if n != 0.0 => n.round().clamp(f64::from(min), f64::from(max)) as u8,
        _ => fallback,
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Normalize for Project {
    const KIND: &'static str = "project";

    fn fallback(index: usize) -> Self {
        Self {
            id: fallback_id(Self::KIND, index),
            title: "Project".to_string(),
            slug: format!("project-{index}"),
            category: "Development".to_string(),
            description: String::new(),
            problem: String::new(),
            solution: String::new(),
            tech_stack: Vec::new(),
            thumbnail: String::new(),
            video_preview: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            featured: false,
            is_published: true,
        }
    }

    fn from_document(doc: &Document, index: usize) -> Self {
        Self {
            id: record_id::<Self>(doc, index),
            title: text(doc, "title", "Project"),
            slug: text(doc, "slug", &format!("project-{index}")),
            category: text(doc, "category", "Development"),
            description: text(doc, "description", ""),
            problem: text(doc, "problem", ""),
            solution: text(doc, "solution", ""),
            tech_stack: list(doc, "techStack"),
            thumbnail: text(doc, "thumbnail", ""),
            video_preview: text(doc, "videoPreview", ""),
            live_url: text(doc, "liveUrl", ""),
            github_url: text(doc, "githubUrl", ""),
            featured: flag(doc, "featured"),
            is_published: published(doc),
        }
    }
}

impl Normalize for Blog {
    const KIND: &'static str = "blog";

    fn fallback(index: usize) -> Self {
        Self {
            id: fallback_id(Self::KIND, index),
            title: "Blog Post".to_string(),
            slug: format!("blog-{index}"),
            excerpt: String::new(),
            content: String::new(),
            category: "General".to_string(),
            tags: Vec::new(),
            thumbnail: String::new(),
            published_at: now_iso(),
            read_time: "5 min read".to_string(),
            author: "Author".to_string(),
            is_published: true,
        }
    }

    fn from_document(doc: &Document, index: usize) -> Self {
        let published_at = match doc.get("publishedAt") {
            None | Some(Value::Null) => now_iso(),
            value => to_safe_string(value, ""),
        };

        Self {
            id: record_id::<Self>(doc, index),
            title: text(doc, "title", "Blog Post"),
            slug: text(doc, "slug", &format!("blog-{index}")),
            excerpt: text(doc, "excerpt", ""),
            content: text(doc, "content", ""),
            category: text(doc, "category", "General"),
            tags: list(doc, "tags"),
            thumbnail: text(doc, "thumbnail", ""),
            published_at,
            read_time: text(doc, "readTime", "5 min read"),
            author: author_name(doc),
            is_published: published(doc),
        }
    }
}

// The backend populates `author` as `{name, avatar}`.
fn author_name(doc: &Document) -> String {
    match doc.get("author") {
        Some(Value::Object(author)) => text(author, "name", "Author"),
        value => to_safe_string(value, "Author"),
    }
}

impl Normalize for Experience {
    const KIND: &'static str = "experience";

    fn fallback(index: usize) -> Self {
        Self {
            id: fallback_id(Self::KIND, index),
            title: "Position".to_string(),
            company: "Company".to_string(),
            location: "Location".to_string(),
            period: "Present".to_string(),
            description: String::new(),
            achievements: Vec::new(),
            entry_type: "experience".to_string(),
            is_published: true,
        }
    }

    fn from_document(doc: &Document, index: usize) -> Self {
        Self {
            id: record_id::<Self>(doc, index),
            title: text(doc, "title", "Position"),
            company: text(doc, "company", "Company"),
            location: text(doc, "location", "Location"),
            period: text(doc, "period", "Present"),
            description: text(doc, "description", ""),
            achievements: list(doc, "achievements"),
            entry_type: text(doc, "type", "experience"),
            is_published: published(doc),
        }
    }
}

impl Normalize for Service {
    const KIND: &'static str = "service";

    fn fallback(index: usize) -> Self {
        Self {
            id: fallback_id(Self::KIND, index),
            title: "Service".to_string(),
            icon: "Briefcase".to_string(),
            description: String::new(),
            features: Vec::new(),
            price: "Contact for pricing".to_string(),
            price_note: "Starting from".to_string(),
            popular: false,
            is_published: true,
        }
    }

    fn from_document(doc: &Document, index: usize) -> Self {
        Self {
            id: record_id::<Self>(doc, index),
            title: text(doc, "title", "Service"),
            icon: text(doc, "icon", "Briefcase"),
            description: text(doc, "description", ""),
            features: list(doc, "features"),
            price: text(doc, "price", "Contact for pricing"),
            price_note: text(doc, "priceNote", "Starting from"),
            popular: flag(doc, "popular"),
            is_published: published(doc),
        }
    }
}

impl Normalize for Testimonial {
    const KIND: &'static str = "testimonial";

    fn fallback(index: usize) -> Self {
        Self {
            id: fallback_id(Self::KIND, index),
            name: "Client".to_string(),
            role: "Role".to_string(),
            company: "Company".to_string(),
            content: String::new(),
            avatar: String::new(),
            rating: DEFAULT_RATING,
            is_published: true,
        }
    }

    fn from_document(doc: &Document, index: usize) -> Self {
        Self {
            id: record_id::<Self>(doc, index),
            name: text(doc, "name", "Client"),
            role: text(doc, "role", "Role"),
            company: text(doc, "company", "Company"),
            content: text(doc, "content", ""),
            avatar: text(doc, "avatar", ""),
            rating: bounded(doc.get("rating"), DEFAULT_RATING, 1, 5),
            is_published: published(doc),
        }
    }
}

impl Normalize for Skill {
    const KIND: &'static str = "skill";

    fn fallback(index: usize) -> Self {
        Self {
            id: fallback_id(Self::KIND, index),
            title: "Skill Category".to_string(),
            icon: "Code".to_string(),
            color: DEFAULT_SKILL_COLOR.to_string(),
            description: String::new(),
            items: Vec::new(),
            is_published: true,
        }
    }

    fn from_document(doc: &Document, index: usize) -> Self {
        let items = match doc.get("items") {
            Some(Value::Array(items)) => items.iter().map(normalize_skill_item).collect(),
            _ => Vec::new(),
        };

        Self {
            id: record_id::<Self>(doc, index),
            title: text(doc, "title", "Skill Category"),
            icon: text(doc, "icon", "Code"),
            color: text(doc, "color", DEFAULT_SKILL_COLOR),
            description: text(doc, "description", ""),
            items,
            is_published: published(doc),
        }
    }
}

/// Normalize one entry of a skill category's `items`.
///
/// A bare string is promoted to an item at [`DEFAULT_SKILL_LEVEL`].
pub fn normalize_skill_item(item: &Value) -> SkillItem {
    match item {
        Value::String(name) => SkillItem {
            name: name.clone(),
            level: DEFAULT_SKILL_LEVEL,
        },
        Value::Object(doc) => SkillItem {
            name: text(doc, "name", "Skill"),
            level: bounded(doc.get("level"), DEFAULT_SKILL_LEVEL, 1, 100),
        },
        _ => SkillItem {
            name: "Skill".to_string(),
            level: DEFAULT_SKILL_LEVEL,
        },
    }
}

pub fn normalize_project(doc: &Value, index: usize) -> Project {
    Project::normalize(doc, index)
}

pub fn normalize_project_array(data: &Value) -> Vec<Project> {
    Project::normalize_array(data)
}

pub fn normalize_blog(doc: &Value, index: usize) -> Blog {
    Blog::normalize(doc, index)
}

pub fn normalize_blog_array(data: &Value) -> Vec<Blog> {
    Blog::normalize_array(data)
}

pub fn normalize_experience(doc: &Value, index: usize) -> Experience {
    Experience::normalize(doc, index)
}

pub fn normalize_experience_array(data: &Value) -> Vec<Experience> {
    Experience::normalize_array(data)
}

pub fn normalize_service(doc: &Value, index: usize) -> Service {
    Service::normalize(doc, index)
}

pub fn normalize_service_array(data: &Value) -> Vec<Service> {
    Service::normalize_array(data)
}

pub fn normalize_testimonial(doc: &Value, index: usize) -> Testimonial {
    Testimonial::normalize(doc, index)
}

pub fn normalize_testimonial_array(data: &Value) -> Vec<Testimonial> {
    Testimonial::normalize_array(data)
}

pub fn normalize_skill(doc: &Value, index: usize) -> Skill {
    Skill::normalize(doc, index)
}

pub fn normalize_skill_array(data: &Value) -> Vec<Skill> {
    Skill::normalize_array(data)
}

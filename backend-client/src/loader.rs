//! Fallback-aware content loading.
//!
//! A failed or empty backend response is replaced by caller-supplied
//! defaults, usually [`SeedContent::bundled`]. The caller always learns
//! which source the items came from.

use folio_content::{Blog, Experience, Project, SeedContent, Service, Skill, Testimonial};
use serde::Serialize;

use crate::client::PortfolioClient;
use crate::envelope::FetchResult;

/// Where a loaded list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Fallback,
}

/// Items plus their provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: DataSource,
    /// Backend error that caused the fallback, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Use the fetched items when the call succeeded with a non-empty list,
/// otherwise `fallback`.
pub fn resolve_with_fallback<T>(result: FetchResult<Vec<T>>, fallback: Vec<T>) -> Loaded<T> {
    match result.data {
        Some(items) if result.success && !items.is_empty() => Loaded {
            items,
            source: DataSource::Remote,
            error: None,
        },
        _ => Loaded {
            items: fallback,
            source: DataSource::Fallback,
            error: result.error,
        },
    }
}

/// Every section of the site, loaded concurrently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteContent {
    pub projects: Loaded<Project>,
    pub blogs: Loaded<Blog>,
    pub skills: Loaded<Skill>,
    pub services: Loaded<Service>,
    pub experience: Loaded<Experience>,
    pub testimonials: Loaded<Testimonial>,
}

impl SiteContent {
    /// True when at least one section fell back.
    pub fn is_degraded(&self) -> bool {
        self.projects.is_fallback()
            || self.blogs.is_fallback()
            || self.skills.is_fallback()
            || self.services.is_fallback()
            || self.experience.is_fallback()
            || self.testimonials.is_fallback()
    }
}

#[derive(Debug, Clone)]
pub struct ContentLoader {
    client: PortfolioClient,
}

impl ContentLoader {
    pub fn new(client: PortfolioClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PortfolioClient {
        &self.client
    }

    pub async fn projects(&self, fallback: Vec<Project>) -> Loaded<Project> {
        resolve_logged("projects", self.client.get_projects().await, fallback)
    }

    pub async fn blogs(&self, fallback: Vec<Blog>) -> Loaded<Blog> {
        resolve_logged("blogs", self.client.get_blogs().await, fallback)
    }

    pub async fn skills(&self, fallback: Vec<Skill>) -> Loaded<Skill> {
        resolve_logged("skills", self.client.get_skills().await, fallback)
    }

    pub async fn services(&self, fallback: Vec<Service>) -> Loaded<Service> {
        resolve_logged("services", self.client.get_services().await, fallback)
    }

    pub async fn experience(&self, fallback: Vec<Experience>) -> Loaded<Experience> {
        resolve_logged("experience", self.client.get_experience().await, fallback)
    }

    pub async fn testimonials(&self, fallback: Vec<Testimonial>) -> Loaded<Testimonial> {
        resolve_logged("testimonials", self.client.get_testimonials().await, fallback)
    }

    /// Load all six sections concurrently, falling back per section.
    pub async fn all(&self, seed: &SeedContent) -> SiteContent {
        let (projects, blogs, skills, services, experience, testimonials) = tokio::join!(
            self.projects(seed.projects.clone()),
            self.blogs(seed.blogs.clone()),
            self.skills(seed.skills.clone()),
            self.services(seed.services.clone()),
            self.experience(seed.experience.clone()),
            self.testimonials(seed.testimonials.clone()),
        );

        SiteContent {
            projects,
            blogs,
            skills,
            services,
            experience,
            testimonials,
        }
    }
}

fn resolve_logged<T>(section: &str, result: FetchResult<Vec<T>>, fallback: Vec<T>) -> Loaded<T> {
    let loaded = resolve_with_fallback(result, fallback);
    if loaded.is_fallback() {
        tracing::debug!(
            section,
            count = loaded.items.len(),
            error = loaded.error.as_deref().unwrap_or("empty response"),
            "using fallback content"
        );
    }
    loaded
}

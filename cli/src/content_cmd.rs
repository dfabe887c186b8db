//! Folio CLI commands
//!
//! Reads portfolio content from the backend, falling back to the bundled
//! seed content when the backend is unreachable or returns nothing.
//!
//! ## Exit codes
//!
//! - 0: content printed (remote or fallback), or contact form accepted
//! - 1: request failed and no fallback was available
//! - 2: invalid contact form input

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_backend_client::{
    BlogQuery, ClientConfig, ContactForm, ContactSubject, ContentLoader, DataSource, FetchResult,
    Loaded, PortfolioClient, ProjectQuery, resolve_with_fallback,
};
use folio_content::{Blog, Project, SeedContent};
use serde::Serialize;

use crate::render::{Summary, render_list};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Browse portfolio content served by the folio backend
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
pub struct FolioCli {
    /// Backend API root (overrides FOLIO_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Client config file (default: ~/.config/folio/client.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output as JSON for automation
    #[arg(long, global = true)]
    pub json: bool,

    /// Fail instead of showing bundled content when the backend is unavailable
    #[arg(long, global = true)]
    pub no_fallback: bool,

    #[command(subcommand)]
    pub command: FolioSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum FolioSubcommand {
    /// List projects
    Projects(ProjectsArgs),
    /// Show one project by id or slug
    Project {
        #[arg(value_name = "ID_OR_SLUG")]
        id: String,
    },
    /// List blog posts
    Blogs(BlogsArgs),
    /// Show one blog post by slug
    Blog { slug: String },
    /// List skill categories
    Skills,
    /// List offered services
    Services,
    /// List work experience and education
    Experience,
    /// List client testimonials
    Testimonials,
    /// Send a contact inquiry
    Contact(ContactArgs),
}

#[derive(Debug, Parser)]
pub struct ProjectsArgs {
    /// Only featured projects
    #[arg(long)]
    pub featured: bool,

    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Parser)]
pub struct BlogsArgs {
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub tag: Option<String>,

    /// 1-based page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Posts per page
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Parser)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// One of project, consultation, teaching, job, other
    #[arg(long)]
    pub subject: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub message: String,
}

impl FolioCli {
    pub async fn run(self) -> i32 {
        match self.try_run().await {
            Ok(code) => code,
            Err(e) => {
                eprintln!("error: {e:#}");
                EXIT_FAILED
            }
        }
    }

    async fn try_run(self) -> Result<i32> {
        let client = self.build_client()?;
        let seed = if self.no_fallback {
            SeedContent::default()
        } else {
            SeedContent::bundled()
        };
        let loader = ContentLoader::new(client.clone());
        let out = Output { json: self.json };

        let code = match self.command {
            FolioSubcommand::Projects(args) => {
                let query = ProjectQuery {
                    featured: args.featured,
                    category: args.category,
                };
                let fallback = filter_projects(seed.projects, &query);
                let loaded = if query == ProjectQuery::default() {
                    loader.projects(fallback).await
                } else {
                    resolve_with_fallback(client.get_projects_filtered(&query).await, fallback)
                };
                out.list("Projects", &loaded)?
            }
            FolioSubcommand::Project { id } => {
                let fallback = seed
                    .projects
                    .into_iter()
                    .find(|p| p.id == id || p.slug == id);
                out.single(client.get_project(&id).await, fallback)?
            }
            FolioSubcommand::Blogs(args) => {
                let query = BlogQuery {
                    category: args.category,
                    tag: args.tag,
                    page: args.page,
                    limit: args.limit,
                };
                let fallback = filter_blogs(seed.blogs, &query);
                let loaded = if query == BlogQuery::default() {
                    loader.blogs(fallback).await
                } else {
                    resolve_with_fallback(client.get_blogs_filtered(&query).await, fallback)
                };
                out.list("Blog posts", &loaded)?
            }
            FolioSubcommand::Blog { slug } => {
                let fallback = seed.blogs.into_iter().find(|b| b.slug == slug);
                out.single(client.get_blog_by_slug(&slug).await, fallback)?
            }
            FolioSubcommand::Skills => out.list("Skills", &loader.skills(seed.skills).await)?,
            FolioSubcommand::Services => {
                out.list("Services", &loader.services(seed.services).await)?
            }
            FolioSubcommand::Experience => {
                out.list("Experience", &loader.experience(seed.experience).await)?
            }
            FolioSubcommand::Testimonials => {
                out.list("Testimonials", &loader.testimonials(seed.testimonials).await)?
            }
            FolioSubcommand::Contact(args) => submit_contact(&client, args, out).await?,
        };

        Ok(code)
    }

    fn build_client(&self) -> Result<PortfolioClient> {
        let config = ClientConfig::load_with_overrides(self.config.as_deref(), self.api_url.clone())
            .context("failed to load client config")?;

        tracing::debug!(base_url = %config.base_url, "using backend");
        PortfolioClient::new(&config).context("failed to create backend client")
    }
}

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn list<T: Serialize + Summary>(self, heading: &str, loaded: &Loaded<T>) -> Result<i32> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(loaded)?);
        } else {
            print!("{}", render_list(heading, loaded));
        }
        Ok(list_exit_code(loaded))
    }

    fn single<T: Serialize + Summary>(self, result: FetchResult<T>, fallback: Option<T>) -> Result<i32> {
        let found = Found::resolve(result, fallback);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&found)?);
        } else {
            match &found.item {
                Some(item) => println!("{}", item.summary()),
                None => eprintln!(
                    "not found: {}",
                    found.error.as_deref().unwrap_or("empty response")
                ),
            }
        }
        Ok(if found.item.is_some() {
            EXIT_OK
        } else {
            EXIT_FAILED
        })
    }
}

/// Single-record lookup with provenance, the one-item counterpart of [`Loaded`].
#[derive(Debug, Serialize)]
struct Found<T> {
    item: Option<T>,
    source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> Found<T> {
    fn resolve(result: FetchResult<T>, fallback: Option<T>) -> Self {
        match result.data {
            Some(item) if result.success => Self {
                item: Some(item),
                source: DataSource::Remote,
                error: None,
            },
            _ => Self {
                item: fallback,
                source: DataSource::Fallback,
                error: result.error,
            },
        }
    }
}

/// Failure only when the backend errored and nothing was shown instead.
fn list_exit_code<T>(loaded: &Loaded<T>) -> i32 {
    if loaded.error.is_some() && loaded.items.is_empty() {
        EXIT_FAILED
    } else {
        EXIT_OK
    }
}

async fn submit_contact(client: &PortfolioClient, args: ContactArgs, out: Output) -> Result<i32> {
    let subject = match args.subject.parse::<ContactSubject>() {
        Ok(subject) => subject,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(EXIT_INVALID_INPUT);
        }
    };

    let mut form = ContactForm::new(args.name, args.email, subject, args.message);
    if let Some(phone) = args.phone {
        form = form.with_phone(phone);
    }
    if let Err(e) = form.validate() {
        eprintln!("error: {e}");
        return Ok(EXIT_INVALID_INPUT);
    }

    let result = client.submit_contact(&form).await;
    if out.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.success {
        println!("Message sent. Thank you, {}!", form.name);
    } else {
        eprintln!(
            "failed to send message: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(if result.success {
        EXIT_OK
    } else {
        EXIT_FAILED
    })
}

// The seed is applied client-side with the backend's filter semantics.
fn filter_projects(projects: Vec<Project>, query: &ProjectQuery) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| !query.featured || p.featured)
        .filter(|p| query.category.as_ref().is_none_or(|c| &p.category == c))
        .collect()
}

fn filter_blogs(blogs: Vec<Blog>, query: &BlogQuery) -> Vec<Blog> {
    let page = query.page.unwrap_or(1).max(1) as usize;
    let limit = query.limit.unwrap_or(10).max(1) as usize;

    blogs
        .into_iter()
        .filter(|b| query.category.as_ref().is_none_or(|c| &b.category == c))
        .filter(|b| query.tag.as_ref().is_none_or(|t| b.tags.contains(t)))
        .skip((page - 1) * limit)
        .take(limit)
        .collect()
}

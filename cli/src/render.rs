//! Plain-text summaries of content records.

use folio_backend_client::{DataSource, Loaded};
use folio_content::{Blog, Experience, Project, Service, Skill, Testimonial};

/// One-line description of a record for terminal output.
pub trait Summary {
    fn summary(&self) -> String;
}

impl Summary for Project {
    fn summary(&self) -> String {
        let star = if self.featured { " *" } else { "" };
        let mut line = format!("{} [{}] ({}){star}", self.title, self.slug, self.category);
        if !self.tech_stack.is_empty() {
            line.push_str(&format!(" - {}", self.tech_stack.join(", ")));
        }
        line
    }
}

impl Summary for Blog {
    fn summary(&self) -> String {
        format!(
            "{} [{}] by {}, {} ({})",
            self.title, self.slug, self.author, self.published_at, self.read_time
        )
    }
}

impl Summary for Skill {
    fn summary(&self) -> String {
        let items: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("{} {}%", item.name, item.level))
            .collect();
        format!("{}: {}", self.title, items.join(", "))
    }
}

impl Summary for Service {
    fn summary(&self) -> String {
        let popular = if self.popular { " (popular)" } else { "" };
        format!("{}{popular} - {} {}", self.title, self.price_note, self.price)
    }
}

impl Summary for Experience {
    fn summary(&self) -> String {
        format!(
            "{} at {}, {} ({})",
            self.title, self.company, self.location, self.period
        )
    }
}

impl Summary for Testimonial {
    fn summary(&self) -> String {
        format!(
            "{} ({}, {}) {}/5",
            self.name, self.role, self.company, self.rating
        )
    }
}

/// Heading plus one bullet per item.
pub fn render_list<T: Summary>(heading: &str, loaded: &Loaded<T>) -> String {
    let mut out = format!("{heading} ({})\n", source_label(loaded));
    if loaded.items.is_empty() {
        out.push_str("  (none)\n");
    }
    for item in &loaded.items {
        out.push_str(&format!("  - {}\n", item.summary()));
    }
    out
}

fn source_label<T>(loaded: &Loaded<T>) -> String {
    match (loaded.source, &loaded.error) {
        (DataSource::Remote, _) => "remote".to_string(),
        (DataSource::Fallback, Some(error)) => format!("fallback: {error}"),
        (DataSource::Fallback, None) => "fallback: empty response".to_string(),
    }
}

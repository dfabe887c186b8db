use folio_backend_client::ContentLoader;
use folio_backend_client::DataSource;
use folio_backend_client::PortfolioClient;
use folio_content::Normalize;
use folio_content::SeedContent;
use folio_content::Testimonial;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

use super::client_for;

#[tokio::test]
async fn remote_content_is_preferred() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"title": "Live"}]})))
        .mount(&server)
        .await;

    let loader = ContentLoader::new(client_for(&server));
    let loaded = loader.projects(SeedContent::bundled().projects).await;

    assert_eq!(loaded.source, DataSource::Remote);
    assert_eq!(loaded.items.len(), 1);
    assert_eq!(loaded.items[0].title, "Live");
}

#[tokio::test]
async fn empty_remote_list_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testimonials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let fallback = vec![Testimonial::fallback(0)];
    let loader = ContentLoader::new(client_for(&server));
    let loaded = loader.testimonials(fallback.clone()).await;

    assert_eq!(loaded.source, DataSource::Fallback);
    assert_eq!(loaded.items, fallback);
    assert_eq!(loaded.error, None);
}

#[tokio::test]
async fn unreachable_backend_loads_entire_seed() {
    let client = PortfolioClient::with_client(reqwest::Client::new(), "http://127.0.0.1:1/api");
    let seed = SeedContent::bundled();

    let site = ContentLoader::new(client).all(&seed).await;

    assert!(site.is_degraded());
    assert_eq!(site.projects.items, seed.projects);
    assert_eq!(site.blogs.items, seed.blogs);
    assert_eq!(site.skills.items, seed.skills);
    assert_eq!(site.services.items, seed.services);
    assert_eq!(site.experience.items, seed.experience);
    assert_eq!(site.testimonials.items, seed.testimonials);
    let error = site.skills.error.expect("network error recorded");
    assert!(error.starts_with("network error"), "{error}");
}

#[tokio::test]
async fn sections_fall_back_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"title": "Backend", "items": []}]})),
        )
        .mount(&server)
        .await;
    // Every other section answers 404.

    let seed = SeedContent::bundled();
    let site = ContentLoader::new(client_for(&server)).all(&seed).await;

    assert_eq!(site.skills.source, DataSource::Remote);
    assert_eq!(site.skills.items[0].title, "Backend");
    assert_eq!(site.projects.source, DataSource::Fallback);
    assert_eq!(site.projects.error.as_deref(), Some("HTTP 404"));
    assert_eq!(site.blogs.items, seed.blogs);
    assert!(site.is_degraded());
}

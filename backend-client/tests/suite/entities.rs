use folio_backend_client::BlogQuery;
use folio_backend_client::ProjectQuery;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

use super::client_for;

async fn serve(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn skills_are_normalized_end_to_end() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/api/skills",
        json!({"success": true, "data": [{"key": "mern", "title": "MERN", "items": ["React", "Node"]}]}),
    )
    .await;

    let result = client_for(&server).get_skills().await;

    assert_eq!(
        serde_json::to_value(&result).expect("serialize"),
        json!({
            "success": true,
            "data": [{
                "id": "skill-fallback-0",
                "title": "MERN",
                "icon": "Code",
                "color": "from-blue-500 to-cyan-500",
                "description": "",
                "items": [{"name": "React", "level": 80}, {"name": "Node", "level": 80}],
                "isPublished": true
            }],
            "error": null
        })
    );
}

#[tokio::test]
async fn projects_from_results_envelope() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/api/projects",
        json!({"results": [
            {"_id": "65a1", "title": "News Portal", "techStack": ["Next.js", "", "MongoDB"], "featured": true},
            "not an object",
        ]}),
    )
    .await;

    let projects = client_for(&server)
        .get_projects()
        .await
        .data
        .expect("projects");

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "65a1");
    assert_eq!(projects[0].title, "News Portal");
    assert_eq!(projects[0].tech_stack, vec!["Next.js", "MongoDB"]);
    assert!(projects[0].featured);
    assert_eq!(projects[1].id, "project-fallback-1");
    assert_eq!(projects[1].title, "Project");
    assert_eq!(projects[1].slug, "project-1");
}

#[tokio::test]
async fn non_array_payload_yields_empty_list() {
    let server = MockServer::start().await;
    serve(&server, "/api/testimonials", json!({"data": {"name": "solo"}})).await;

    let result = client_for(&server).get_testimonials().await;

    assert!(result.success);
    assert_eq!(result.data, Some(Vec::new()));
}

#[tokio::test]
async fn experience_and_services_use_their_defaults() {
    let server = MockServer::start().await;
    serve(&server, "/api/experience", json!({"data": [{"id": 7, "type": "education"}]})).await;
    serve(&server, "/api/services", json!({"items": [{"title": "Web Apps", "popular": 1}]})).await;

    let client = client_for(&server);
    let experience = client.get_experience().await.data.expect("experience");
    let services = client.get_services().await.data.expect("services");

    assert_eq!(experience[0].id, "7");
    assert_eq!(experience[0].entry_type, "education");
    assert_eq!(experience[0].period, "Present");
    assert_eq!(services[0].title, "Web Apps");
    assert_eq!(services[0].price, "Contact for pricing");
    assert!(services[0].popular);
}

#[tokio::test]
async fn testimonial_rating_is_clamped() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/api/testimonials",
        json!({"data": [{"rating": 9}, {"rating": "3"}, {"rating": 0}]}),
    )
    .await;

    let testimonials = client_for(&server)
        .get_testimonials()
        .await
        .data
        .expect("testimonials");

    let ratings: Vec<u8> = testimonials.iter().map(|t| t.rating).collect();
    assert_eq!(ratings, vec![5, 3, 5]);
}

#[tokio::test]
async fn blog_by_slug_normalizes_single_record() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/api/blogs/jwt-best-practices",
        json!({"success": true, "data": {
            "_id": "b1",
            "title": "JWT Best Practices",
            "slug": "jwt-best-practices",
            "author": {"name": "Suman", "avatar": ""},
            "tags": ["auth", "jwt"],
            "publishedAt": "2024-03-01T00:00:00.000Z"
        }}),
    )
    .await;

    let blog = client_for(&server)
        .get_blog_by_slug("jwt-best-practices")
        .await
        .data
        .expect("blog");

    assert_eq!(blog.id, "b1");
    assert_eq!(blog.author, "Suman");
    assert_eq!(blog.tags, vec!["auth", "jwt"]);
    assert_eq!(blog.published_at, "2024-03-01T00:00:00.000Z");
    assert_eq!(blog.read_time, "5 min read");
}

#[tokio::test]
async fn missing_blog_is_soft_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"success": false, "message": "Blog not found"})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).get_blog_by_slug("nope").await;

    assert!(!result.success);
    assert_eq!(result.data, None);
    assert_eq!(result.error.as_deref(), Some("HTTP 404"));
}

#[tokio::test]
async fn single_project_by_id() {
    let server = MockServer::start().await;
    serve(&server, "/api/projects/news-portal", json!({"data": {"slug": "news-portal"}})).await;

    let project = client_for(&server)
        .get_project("news-portal")
        .await
        .data
        .expect("project");

    assert_eq!(project.id, "project-fallback-0");
    assert_eq!(project.slug, "news-portal");
}

#[tokio::test]
async fn filtered_projects_send_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(query_param("featured", "true"))
        .and(query_param("category", "Full Stack"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"title": "Match"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProjectQuery {
        featured: true,
        category: Some("Full Stack".to_string()),
    };
    let projects = client_for(&server)
        .get_projects_filtered(&query)
        .await
        .data
        .expect("projects");

    assert_eq!(projects[0].title, "Match");
}

#[tokio::test]
async fn filtered_blogs_send_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .and(query_param("tag", "rust"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"title": "Paged"}],
            "pagination": {"page": 2, "limit": 5, "total": 6, "pages": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = BlogQuery {
        tag: Some("rust".to_string()),
        page: Some(2),
        limit: Some(5),
        ..Default::default()
    };
    let blogs = client_for(&server)
        .get_blogs_filtered(&query)
        .await
        .data
        .expect("blogs");

    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].title, "Paged");
}

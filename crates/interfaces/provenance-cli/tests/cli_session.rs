use axum::extract::{Path, RawQuery};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{routing::get, routing::post, Router};
use provenance_app_core::ArchiveContext;
use provenance_cli::{commands, ListArgs, OutputFormat};
use provenance_core::{Credentials, FilterKey};
use provenance_infra::ArchiveClient;
use std::net::SocketAddr;

fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    let prefix = format!("{name}=");
    raw.split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix(prefix.as_str()))
        .map(str::to_string)
}

fn json(status: StatusCode, body: String) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

fn signed_in(headers: &HeaderMap) -> bool {
    cookie(headers, "sessionid").is_some()
}

async fn start_archive() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(
            "/api/auth/csrf/",
            get(|| async {
                (
                    [(header::SET_COOKIE, "csrftoken=cli-token; Path=/")],
                    json(StatusCode::OK, r#"{"detail":"CSRF cookie set"}"#.into()),
                )
            }),
        )
        .route(
            "/api/auth/me/",
            get(|| async { json(StatusCode::OK, r#"{"is_authenticated": false}"#.into()) }),
        )
        .route(
            "/api/auth/login/",
            post(|headers: HeaderMap, body: String| async move {
                let token = headers.get("x-csrftoken").and_then(|v| v.to_str().ok());
                if token.is_none() || token.map(str::to_string) != cookie(&headers, "csrftoken") {
                    return json(StatusCode::FORBIDDEN, r#"{"detail":"CSRF Failed"}"#.into())
                        .into_response();
                }
                let creds: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
                if creds["username"] != "curator" || creds["password"] != "secret" {
                    return json(StatusCode::UNAUTHORIZED, r#"{"error":"Invalid credentials"}"#.into())
                        .into_response();
                }
                (
                    [(header::SET_COOKIE, "sessionid=s1; Path=/")],
                    json(
                        StatusCode::OK,
                        r#"{"username":"curator","email":"c@archive.test","is_authenticated":true,"is_staff":true}"#.into(),
                    ),
                )
                    .into_response()
            }),
        )
        .route(
            "/api/art-types/",
            get(|| async {
                json(
                    StatusCode::OK,
                    r#"{"results":[{"id":3,"name":"Painting"},{"id":4,"name":"Sculpture"}]}"#.into(),
                )
            }),
        )
        .route(
            "/api/mediums/",
            get(|| async {
                json(
                    StatusCode::OK,
                    r#"{"results":[{"id":7,"name":"Oil","art_type":3},{"id":9,"name":"Bronze","art_type":4}]}"#.into(),
                )
            }),
        )
        .route(
            "/api/event-types/",
            get(|| async { json(StatusCode::OK, r#"{"results":[{"id":2,"name":"Sale"}]}"#.into()) }),
        )
        .route(
            "/api/artworks/",
            get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
                if !signed_in(&headers) {
                    return json(StatusCode::FORBIDDEN, r#"{"detail":"Not authenticated"}"#.into());
                }
                let query = query.unwrap_or_default();
                let body = if query.contains("medium=7") {
                    r#"{"results":[{"id":1,"name":"Still Life","medium":"Oil"},{"id":3,"name":"Harbour","medium":"Oil"}]}"#
                } else {
                    r#"{"results":[{"id":1,"name":"Still Life"},{"id":2,"name":"Portrait"},{"id":3,"name":"Harbour"}]}"#
                };
                json(StatusCode::OK, body.into())
            }),
        )
        .route(
            "/api/artworks/:id/",
            get(|Path(id): Path<u64>| async move {
                if id != 1 {
                    return json(StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#.into());
                }
                json(
                    StatusCode::OK,
                    r#"{"id":1,"name":"Still Life","medium":"Oil","provenance":[
                        {"id":11,"sequence":2,"type":"Sale","date":"1911"},
                        {"id":10,"sequence":1,"type":"Commission","date":"1650"}
                    ]}"#
                    .into(),
                )
            }),
        )
        .route(
            "/api/persons/",
            get(|| async {
                json(
                    StatusCode::OK,
                    r#"{"results":[{"id":5,"family_name":"Vermeer","first_name":"Johannes"}]}"#.into(),
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn curator(password: &str) -> Option<Credentials> {
    Some(Credentials {
        username: "curator".into(),
        password: password.into(),
    })
}

async fn context(addr: SocketAddr, credentials: Option<Credentials>) -> ArchiveContext<ArchiveClient> {
    let ctx = ArchiveContext::connect(&format!("http://{addr}/api")).unwrap();
    commands::open_session(&ctx, credentials).await.unwrap();
    ctx
}

#[tokio::test]
async fn anonymous_list_is_refused_with_return_location() {
    let (addr, handle) = start_archive().await;
    let ctx = context(addr, None).await;

    let args = ListArgs {
        query: "art_type=3".into(),
        ..Default::default()
    };
    let err = commands::cmd_artworks(&ctx, &args, OutputFormat::Json)
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .contains("/artworks?art_type=3 requires a signed-in session"));
    assert_eq!(commands::cmd_whoami(&ctx, OutputFormat::Text).unwrap(), None);

    handle.abort();
}

#[tokio::test]
async fn bad_password_fails_sign_in() {
    let (addr, handle) = start_archive().await;
    let ctx = ArchiveContext::connect(&format!("http://{addr}/api")).unwrap();

    let err = commands::open_session(&ctx, curator("wrong")).await.unwrap_err();

    assert!(err.to_string().contains("Sign-in failed for curator"));
    assert!(format!("{err:#}").contains("Invalid credentials"));

    handle.abort();
}

#[tokio::test]
async fn signed_in_list_applies_selections_and_search() {
    let (addr, handle) = start_archive().await;
    let ctx = context(addr, curator("secret")).await;

    let whoami = commands::cmd_whoami(&ctx, OutputFormat::Text).unwrap().unwrap();
    assert_eq!(whoami.handle, "curator");

    let args = ListArgs {
        query: String::new(),
        select: vec![(FilterKey::ArtType, 3), (FilterKey::Medium, 7)],
        search: Some("life".into()),
    };
    let out = commands::cmd_artworks(&ctx, &args, OutputFormat::Text)
        .await
        .unwrap();

    assert_eq!(out.location, "/artworks?q=life&art_type=3&medium=7");
    let names: Vec<_> = out.items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Still Life"]);

    handle.abort();
}

#[tokio::test]
async fn medium_outside_art_type_is_not_applied() {
    let (addr, handle) = start_archive().await;
    let ctx = context(addr, curator("secret")).await;

    let args = ListArgs {
        query: "art_type=4".into(),
        select: vec![(FilterKey::Medium, 7)],
        search: None,
    };
    let out = commands::cmd_artworks(&ctx, &args, OutputFormat::Json)
        .await
        .unwrap();

    assert_eq!(out.location, "/artworks?art_type=4");
    assert_eq!(out.items.len(), 3);

    handle.abort();
}

#[tokio::test]
async fn artwork_detail_orders_provenance_and_reports_missing() {
    let (addr, handle) = start_archive().await;
    let ctx = context(addr, curator("secret")).await;

    let art = commands::cmd_artwork(&ctx, 1, OutputFormat::Text).await.unwrap();
    let sequence: Vec<_> = art.provenance.iter().map(|ev| ev.sequence).collect();
    assert_eq!(sequence, vec![1, 2]);

    let err = commands::cmd_artwork(&ctx, 99, OutputFormat::Text)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Artwork 99 not found");

    handle.abort();
}

#[tokio::test]
async fn options_and_persons_load_after_sign_in() {
    let (addr, handle) = start_archive().await;
    let ctx = context(addr, curator("secret")).await;

    let options = commands::cmd_options(&ctx, OutputFormat::Text).await.unwrap();
    assert_eq!(options.art_types.len(), 2);
    assert_eq!(options.mediums[1].parent_id, Some(4));
    assert_eq!(options.event_types[0].display_name, "Sale");

    let args = ListArgs {
        query: "event_type=2".into(),
        ..Default::default()
    };
    let out = commands::cmd_persons(&ctx, &args, OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(out.location, "/persons?event_type=2");
    assert_eq!(out.items[0].sort_label(), "Vermeer, Johannes");

    handle.abort();
}

//! Unit tests for the RestRepository implementation
//!
//! These tests use mockito to mock metadata API responses.

use mockito::{Matcher, Server};
use quiver_core::catalog::TrainingDatasetType;
use quiver_repository::{ApiConfig, MetadataRepository, RepositoryError, RestRepository};

const FEATURE_GROUP_JSON: &str = r#"{
    "id": 15,
    "name": "fg_test",
    "version": 1,
    "featurestoreName": "test",
    "features": [
        {"name": "intt", "type": "int", "primary": true},
        {"name": "stringt", "type": "string"}
    ],
    "onlineEnabled": false
}"#;

fn feature_view_json() -> String {
    format!(
        r#"{{
        "id": 4,
        "name": "fv_test",
        "version": 1,
        "featurestoreName": "test",
        "query": {{
            "featureGroup": {},
            "features": ["intt", "stringt"]
        }}
    }}"#,
        FEATURE_GROUP_JSON
    )
}

fn repository(server: &Server) -> RestRepository {
    RestRepository::new(ApiConfig::new(server.url())).expect("Failed to create repository")
}

#[tokio::test]
async fn test_get_feature_group() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/featuregroups/fg_test/versions/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FEATURE_GROUP_JSON)
        .create_async()
        .await;

    let fg = repository(&server)
        .get_feature_group("fg_test", 1)
        .await
        .expect("Failed to fetch feature group");

    assert_eq!(fg.id, 15);
    assert_eq!(fg.qualified_name(), "test.fg_test_1");
    assert_eq!(fg.features.len(), 2);
}

#[tokio::test]
async fn test_get_feature_group_not_found() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/featuregroups/missing/versions/1")
        .with_status(404)
        .create_async()
        .await;

    let result = repository(&server).get_feature_group("missing", 1).await;

    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}

#[tokio::test]
async fn test_get_feature_group_server_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/featuregroups/fg_test/versions/1")
        .with_status(500)
        .create_async()
        .await;

    let result = repository(&server).get_feature_group("fg_test", 1).await;

    assert!(matches!(result, Err(RepositoryError::ApiError(_))));
}

#[tokio::test]
async fn test_get_feature_group_parse_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/featuregroups/fg_test/versions/1")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let result = repository(&server).get_feature_group("fg_test", 1).await;

    assert!(matches!(result, Err(RepositoryError::ParseError(_))));
}

#[tokio::test]
async fn test_get_feature_view() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/featureviews/fv_test/versions/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(feature_view_json())
        .create_async()
        .await;

    let fv = repository(&server)
        .get_feature_view("fv_test", 1)
        .await
        .expect("Failed to fetch feature view");

    assert_eq!(fv.name, "fv_test");
    assert_eq!(fv.query.feature_group.id, 15);
    assert_eq!(fv.query.features, vec!["intt", "stringt"]);
}

#[tokio::test]
async fn test_get_training_dataset() {
    let mut server = Server::new_async().await;
    let _fv_mock = server
        .mock("GET", "/featureviews/fv_test/versions/1")
        .with_status(200)
        .with_body(feature_view_json())
        .create_async()
        .await;
    let _td_mock = server
        .mock("GET", "/featureviews/fv_test/versions/1/trainingdatasets/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "id": 7,
            "version": 1,
            "datasetType": "MATERIALIZED",
            "dataFormat": "parquet",
            "location": "/Projects/test/td_1"
        }"#,
        )
        .create_async()
        .await;

    let repo = repository(&server);
    let fv = repo.get_feature_view("fv_test", 1).await.unwrap();
    let td = repo
        .get_training_dataset(&fv, 1)
        .await
        .expect("Failed to fetch training dataset");

    assert_eq!(td.dataset_type, TrainingDatasetType::Materialized);
    assert_eq!(td.location, "/Projects/test/td_1");
}

#[tokio::test]
async fn test_create_training_dataset() {
    let mut server = Server::new_async().await;
    let _fv_mock = server
        .mock("GET", "/featureviews/fv_test/versions/1")
        .with_status(200)
        .with_body(feature_view_json())
        .create_async()
        .await;
    let _td_mock = server
        .mock("POST", "/featureviews/fv_test/versions/1/trainingdatasets")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 8, "version": 2, "datasetType": "IN_MEMORY"}"#)
        .create_async()
        .await;

    let repo = repository(&server);
    let fv = repo.get_feature_view("fv_test", 1).await.unwrap();
    let td = repo
        .create_training_dataset(&fv)
        .await
        .expect("Failed to create training dataset");

    assert_eq!(td.version, 2);
    assert_eq!(td.dataset_type, TrainingDatasetType::InMemory);
}

#[tokio::test]
async fn test_construct_query() {
    let mut server = Server::new_async().await;
    let _fg_mock = server
        .mock("GET", "/featuregroups/fg_test/versions/1")
        .with_status(200)
        .with_body(FEATURE_GROUP_JSON)
        .create_async()
        .await;
    let _query_mock = server
        .mock("POST", "/query/construct")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"query": "SELECT `intt`, `stringt` FROM `test`.`fg_test_1`"}"#)
        .create_async()
        .await;

    let repo = repository(&server);
    let fg = repo.get_feature_group("fg_test", 1).await.unwrap();
    let constructed = repo
        .construct_query(&fg.select_all())
        .await
        .expect("Failed to construct query");

    assert!(constructed.query.starts_with("SELECT"));
    assert!(constructed.pit_query.is_none());
}

#[tokio::test]
async fn test_list_files() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/dataset/files")
        .match_query(Matcher::UrlEncoded(
            "path".into(),
            "/Projects/test/td_1".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 1, "files": [{"path": "/Projects/test/td_1/test.parquet"}]}"#)
        .create_async()
        .await;

    let listing = repository(&server)
        .list_files("/Projects/test/td_1")
        .await
        .expect("Failed to list files");

    assert_eq!(listing.count, 1);
    assert_eq!(listing.files[0].path, "/Projects/test/td_1/test.parquet");
}

#[tokio::test]
async fn test_read_content() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/dataset/content")
        .match_query(Matcher::UrlEncoded(
            "path".into(),
            "/Projects/test/td_1/test.parquet".into(),
        ))
        .with_status(200)
        .with_body(&b"PAR1"[..])
        .create_async()
        .await;

    let content = repository(&server)
        .read_content("/Projects/test/td_1/test.parquet")
        .await
        .expect("Failed to read content");

    assert_eq!(content, b"PAR1");
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/featuregroups/fg_test/versions/1")
        .match_header("Authorization", "Bearer secret_key")
        .with_status(200)
        .with_body(FEATURE_GROUP_JSON)
        .create_async()
        .await;

    let config = ApiConfig::new(server.url()).with_api_key("secret_key");
    let repo = RestRepository::new(config).expect("Failed to create repository");

    let fg = repo
        .get_feature_group("fg_test", 1)
        .await
        .expect("Failed to fetch with auth");

    assert_eq!(fg.id, 15);
}

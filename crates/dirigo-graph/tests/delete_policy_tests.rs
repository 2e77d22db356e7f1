//! Integration tests for delete policy handling.

mod common;

use common::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use dirigo_graph::DeletePolicy;
use dirigo_resource::ResourceLifecycle;

#[tokio::test]
async fn test_best_effort_delete_clears_identity_on_success() {
    let mock = MockGraphServer::new().await;

    mock.mount(
        Mock::given(method("DELETE"))
            .and(path("/v1.0/users/obj-1"))
            .respond_with(ResponseTemplate::new(204)),
    )
    .await;

    let resource = mock.resource(DeletePolicy::BestEffort);
    let mut record = sample_record();
    record.id = Some("obj-1".to_string());

    resource.delete(&mut record).await.unwrap();
    assert!(record.id.is_none());
}

#[tokio::test]
async fn test_best_effort_delete_discards_failure() {
    let mock = MockGraphServer::new().await;

    mock.mount(
        Mock::given(method("DELETE"))
            .and(path("/v1.0/users/obj-1"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(odata_service_unavailable()),
            ),
    )
    .await;

    let resource = mock.resource(DeletePolicy::BestEffort);
    let mut record = sample_record();
    record.id = Some("obj-1".to_string());

    // Teardown keeps moving: the failure is logged and the identity cleared
    resource.delete(&mut record).await.unwrap();
    assert!(record.id.is_none());
}

#[tokio::test]
async fn test_strict_delete_propagates_failure() {
    let mock = MockGraphServer::new().await;

    mock.mount(
        Mock::given(method("DELETE"))
            .and(path("/v1.0/users/obj-1"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(odata_service_unavailable()),
            ),
    )
    .await;

    let resource = mock.resource(DeletePolicy::Strict);
    let mut record = sample_record();
    record.id = Some("obj-1".to_string());

    let err = resource.delete(&mut record).await.unwrap_err();
    assert!(err.is_transient());
    // The host's view still points at the remote object
    assert_eq!(record.id.as_deref(), Some("obj-1"));
}

#[tokio::test]
async fn test_strict_delete_treats_not_found_as_success() {
    let mock = MockGraphServer::new().await;

    mock.mount(
        Mock::given(method("DELETE"))
            .and(path("/v1.0/users/obj-gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(odata_not_found())),
    )
    .await;

    let resource = mock.resource(DeletePolicy::Strict);
    let mut record = sample_record();
    record.id = Some("obj-gone".to_string());

    resource.delete(&mut record).await.unwrap();
    assert!(record.id.is_none());
}

#[tokio::test]
async fn test_create_then_failing_delete_end_to_end() {
    let mock = MockGraphServer::new().await;

    mock.mount(
        Mock::given(method("POST"))
            .and(path("/v1.0/users"))
            .respond_with(ResponseTemplate::new(201).set_body_json(graph_user_json("obj-9"))),
    )
    .await;
    mock.mount(
        Mock::given(method("GET"))
            .and(path("/v1.0/users/obj-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(graph_user_json("obj-9"))),
    )
    .await;
    mock.mount(
        Mock::given(method("DELETE"))
            .and(path("/v1.0/users/obj-9"))
            .respond_with(
                ResponseTemplate::new(502).set_body_json(odata_service_unavailable()),
            ),
    )
    .await;

    let resource = mock.resource(DeletePolicy::BestEffort);
    let mut record = sample_record();

    resource.create(&mut record).await.unwrap();
    assert_eq!(record.id.as_deref(), Some("obj-9"));
    assert!(record.mail.is_some());
    assert!(record.account_enabled);

    resource.delete(&mut record).await.unwrap();
    assert!(record.id.is_none());
}

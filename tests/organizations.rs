mod common;

use mockito::Matcher;
use serde_json::json;
use tfe_client::OrganizationsApi;
use tfe_client::error::{ApiError, Error, ValidationError};
use tfe_client::models::{
    DataRetentionPolicyChoice, DataRetentionPolicyDeleteOlderSetOptions, OrganizationCreateOptions,
    OrganizationUpdateOptions,
};

use common::{MEDIA_TYPE, TOKEN, api_path, client, organization, page};

#[tokio::test]
async fn test_read_organization_sends_token_and_decodes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", api_path("organizations/acme").as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_header("accept", MEDIA_TYPE)
        .with_status(200)
        .with_header("content-type", MEDIA_TYPE)
        .with_body(json!({ "data": organization("acme") }).to_string())
        .create_async()
        .await;

    let org = client(&server).read_organization("acme").await.unwrap();

    mock.assert_async().await;
    assert_eq!(org.name, "acme");
    assert_eq!(org.email, "admin@acme.example.com");
    assert!(org.cost_estimation_enabled);
    assert!(!org.data_retention_policy_choice.is_populated());
    assert_eq!(org.data_retention_policy, None);
}

#[tokio::test]
async fn test_read_missing_organization_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", api_path("organizations/ghost").as_str())
        .with_status(404)
        .with_body(r#"{"errors":[{"status":"404","title":"not found"}]}"#)
        .create_async()
        .await;

    let err = client(&server).read_organization("ghost").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, Error::Api(ApiError::NotFound(ref message)) if message == "not found"));
}

#[tokio::test]
async fn test_create_organization_posts_document() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", api_path("organizations").as_str())
        .match_header("content-type", MEDIA_TYPE)
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "type": "organizations",
                "attributes": { "name": "acme", "email": "admin@acme.example.com" }
            }
        })))
        .with_status(201)
        .with_body(json!({ "data": organization("acme") }).to_string())
        .create_async()
        .await;

    let options = OrganizationCreateOptions::new("acme", "admin@acme.example.com");
    let org = client(&server).create_organization(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(org.name, "acme");
}

#[tokio::test]
async fn test_invalid_organization_name_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .update_organization("bad/name", &OrganizationUpdateOptions::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::InvalidId("organization"))
    );
}

#[tokio::test]
async fn test_list_all_organizations_walks_pages() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", api_path("organizations").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page[number]".into(), "1".into()),
            Matcher::UrlEncoded("page[size]".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body(page(vec![organization("acme"), organization("globex")], 1, 2, 3))
        .create_async()
        .await;
    let second = server
        .mock("GET", api_path("organizations").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page[number]".into(), "2".into()),
            Matcher::UrlEncoded("page[size]".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body(page(vec![organization("initech")], 2, 2, 3))
        .create_async()
        .await;

    let orgs = client(&server).list_all_organizations().await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let names: Vec<&str> = orgs.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["acme", "globex", "initech"]);
}

#[tokio::test]
async fn test_read_data_retention_policy_choice() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "GET",
            api_path("organizations/acme/relationships/data-retention-policy").as_str(),
        )
        .with_status(200)
        .with_body(
            json!({
                "data": {
                    "type": "data-retention-policy-delete-olders",
                    "id": "drp-1",
                    "attributes": { "delete-older-than-n-days": 33 }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let choice = client(&server)
        .read_organization_data_retention_policy_choice("acme")
        .await
        .unwrap();

    let policy = choice.delete_older().expect("delete-older variant");
    assert_eq!(policy.delete_older_than_n_days, 33);
    assert!(choice.dont_delete().is_none());
    assert!(choice.legacy().is_none());
}

#[tokio::test]
async fn test_null_data_retention_policy_is_absent() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "GET",
            api_path("organizations/acme/relationships/data-retention-policy").as_str(),
        )
        .with_status(200)
        .with_body(r#"{"data":null}"#)
        .create_async()
        .await;

    let choice = client(&server)
        .read_organization_data_retention_policy_choice("acme")
        .await
        .unwrap();

    assert_eq!(choice, DataRetentionPolicyChoice::Absent);
    assert!(!choice.is_populated());
}

#[tokio::test]
async fn test_set_delete_older_policy() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            api_path("organizations/acme/relationships/data-retention-policy").as_str(),
        )
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "type": "data-retention-policy-delete-olders",
                "attributes": { "delete-older-than-n-days": 14 }
            }
        })))
        .with_status(201)
        .with_body(
            json!({
                "data": {
                    "type": "data-retention-policy-delete-olders",
                    "id": "drp-2",
                    "attributes": { "delete-older-than-n-days": 14 }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let options = DataRetentionPolicyDeleteOlderSetOptions {
        delete_older_than_n_days: 14,
    };
    let policy = client(&server)
        .set_organization_data_retention_policy_delete_older("acme", &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(policy.id, "drp-2");
    assert_eq!(policy.delete_older_than_n_days, 14);
}

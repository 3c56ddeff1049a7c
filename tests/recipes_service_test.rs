// ABOUTME: Integration tests for the recipe service over an in-memory store
// ABOUTME: Field boundaries, owner policies and the order of authorization checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::TimeDelta;
use recipe_api_server::database::Database;
use recipe_api_server::errors::ErrorCode;
use recipe_api_server::models::Chef;
use recipe_api_server::recipes::{OwnerPolicy, RecipeFilter, RecipeService};
use serde_json::{json, Value};
use std::sync::Arc;

async fn setup(policy: OwnerPolicy) -> (RecipeService<Database>, Chef, Chef) {
    let database = common::create_test_database().await.unwrap();
    let ana = database
        .create_chef("ana", "hash-a", "token-hash-a")
        .await
        .unwrap()
        .unwrap();
    let joao = database
        .create_chef("joao", "hash-j", "token-hash-j")
        .await
        .unwrap()
        .unwrap();
    (RecipeService::new(Arc::new(database), policy), ana, joao)
}

fn with_field(field: &str, value: Value) -> serde_json::Map<String, Value> {
    let mut payload = common::as_object(&common::bolinho_payload());
    payload.insert(field.to_owned(), value);
    payload
}

fn violation(error: &recipe_api_server::errors::AppError, field: &str) -> String {
    error.details.as_ref().unwrap()[field][0]
        .as_str()
        .unwrap()
        .to_owned()
}

#[tokio::test]
async fn test_create_binds_actor_as_owner() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    let recipe = service
        .create(&common::as_object(&common::bolinho_payload()), Some(&ana))
        .await
        .unwrap();

    assert_eq!(recipe.chef.id, ana.id);
    assert_eq!(recipe.chef.username, "ana");
    assert_eq!(recipe.prep_time, TimeDelta::minutes(45));
    assert_eq!(recipe.cook_time, TimeDelta::zero());
    assert_eq!(recipe.servings, 20);
    assert_eq!(recipe.created_at, recipe.updated_at);
}

#[tokio::test]
async fn test_create_without_actor_is_missing_owner() {
    let (service, _, _) = setup(OwnerPolicy::default()).await;

    let error = service
        .create(&common::as_object(&common::bolinho_payload()), None)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert_eq!(error.message, "Only chefs can register recipes");
}

#[tokio::test]
async fn test_name_length_boundary() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    let ok = service
        .create(&with_field("name", json!("a".repeat(255))), Some(&ana))
        .await;
    assert!(ok.is_ok());

    let error = service
        .create(&with_field("name", json!("a".repeat(256))), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValidationFailed);
    assert_eq!(
        violation(&error, "name"),
        "Ensure this field has no more than 255 characters."
    );
}

#[tokio::test]
async fn test_prep_time_boundary() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    let recipe = service
        .create(&with_field("prep_time", json!("00:01:00")), Some(&ana))
        .await
        .unwrap();
    assert_eq!(recipe.prep_time, TimeDelta::minutes(1));

    let error = service
        .create(&with_field("prep_time", json!("00:00:59")), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(
        violation(&error, "prep_time"),
        "Preparation time must be equal to or greater than 1 minute."
    );
}

#[tokio::test]
async fn test_cook_time_boundary() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    assert!(service
        .create(&with_field("cook_time", json!("00:00:00")), Some(&ana))
        .await
        .is_ok());

    let error = service
        .create(&with_field("cook_time", json!("-00:00:01")), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(
        violation(&error, "cook_time"),
        "Cooking time must be equal to or greater than 0 minutes."
    );

    let error = service
        .create(&with_field("cook_time", json!("soon")), Some(&ana))
        .await
        .unwrap_err();
    assert!(violation(&error, "cook_time").starts_with("Duration has wrong format."));
}

#[tokio::test]
async fn test_servings_boundary() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    let recipe = service
        .create(&with_field("servings", json!(1)), Some(&ana))
        .await
        .unwrap();
    assert_eq!(recipe.servings, 1);

    let recipe = service
        .create(&with_field("servings", json!("4")), Some(&ana))
        .await
        .unwrap();
    assert_eq!(recipe.servings, 4);

    let error = service
        .create(&with_field("servings", json!(0)), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(
        violation(&error, "servings"),
        "Servings must be equal to or greater than 1."
    );

    let error = service
        .create(&with_field("servings", json!("abc")), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(violation(&error, "servings"), "A valid integer is required.");
}

#[tokio::test]
async fn test_all_violations_reported_together() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    let error = service
        .create(&serde_json::Map::new(), Some(&ana))
        .await
        .unwrap_err();

    let details = error.details.unwrap();
    for field in ["name", "ingredients", "instructions", "prep_time", "cook_time"] {
        assert_eq!(details[field][0], "This field is required.", "{field}");
    }
    assert!(details.get("servings").is_none());
    assert!(details.get("description").is_none());
}

#[tokio::test]
async fn test_explicit_chef_wins_over_actor() {
    let (service, ana, joao) = setup(OwnerPolicy::default()).await;

    let recipe = service
        .create(&with_field("chef", json!(joao.id)), Some(&ana))
        .await
        .unwrap();
    assert_eq!(recipe.chef.username, "joao");

    let error = service
        .create(&with_field("chef", json!(9999)), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(
        violation(&error, "chef"),
        "Invalid pk \"9999\" - object does not exist."
    );
}

#[tokio::test]
async fn test_update_reassigns_owner_to_actor() {
    let (service, ana, joao) = setup(OwnerPolicy::ReassignToActor).await;
    let payload = common::as_object(&common::bolinho_payload());
    let created = service.create(&payload, Some(&ana)).await.unwrap();

    let updated = service
        .update(created.id, &payload, Some(&joao))
        .await
        .unwrap();

    assert_eq!(updated.chef.username, "joao");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_preserves_owner_under_preserve_policy() {
    let (service, ana, joao) = setup(OwnerPolicy::PreserveOriginal).await;
    let payload = common::as_object(&common::bolinho_payload());
    let created = service.create(&payload, Some(&ana)).await.unwrap();

    let updated = service
        .update(created.id, &with_field("servings", json!(6)), Some(&joao))
        .await
        .unwrap();

    assert_eq!(updated.chef.username, "ana");
    assert_eq!(updated.servings, 6);
}

#[tokio::test]
async fn test_update_replaces_omitted_optional_fields_with_defaults() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;
    let created = service
        .create(&common::as_object(&common::bolinho_payload()), Some(&ana))
        .await
        .unwrap();
    assert_eq!(created.servings, 20);
    assert!(created.description.is_some());

    let mut payload = common::as_object(&common::bolinho_payload());
    payload.remove("servings");
    payload.remove("description");
    let updated = service.update(created.id, &payload, Some(&ana)).await.unwrap();

    assert_eq!(updated.servings, 1);
    assert_eq!(updated.description, None);
}

#[tokio::test]
async fn test_update_check_order() {
    let (service, ana, _) = setup(OwnerPolicy::default()).await;

    let error = service
        .update(4242, &common::as_object(&common::bolinho_payload()), None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);

    let error = service
        .update(4242, &with_field("name", json!("")), Some(&ana))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_then_retrieve() {
    let (service, ana, joao) = setup(OwnerPolicy::default()).await;
    let created = service
        .create(&common::as_object(&common::bolinho_payload()), Some(&ana))
        .await
        .unwrap();

    let error = service.delete(created.id, None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert_eq!(error.message, "Authentication credentials were not provided.");

    service.delete(created.id, Some(&joao)).await.unwrap();
    let error = service.retrieve(created.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    let error = service.delete(created.id, Some(&joao)).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_list_filters() {
    let (service, ana, joao) = setup(OwnerPolicy::default()).await;
    service
        .create(&common::as_object(&common::bolinho_payload()), Some(&ana))
        .await
        .unwrap();
    service
        .create(&common::as_object(&common::feijoada_payload()), Some(&joao))
        .await
        .unwrap();

    let all = service.list(&RecipeFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Feijoada");

    let filter = RecipeFilter {
        name_contains: None,
        chef_username: Some("JOAO".to_owned()),
    };
    let by_chef = service.list(&filter).await.unwrap();
    assert_eq!(by_chef.len(), 1);
    assert!(by_chef.iter().all(|r| filter.matches(r)));
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::setup_db;
use portalrs::domain::models::user::ADMIN_ROLE;
use portalrs::domain::repositories::user_repository::UserRepository;
use portalrs::domain::services::auth_service::{hash_token, AuthService};
use portalrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use std::sync::Arc;

#[tokio::test]
async fn test_ensure_admin_then_resolve_token() {
    let repo = Arc::new(UserRepositoryImpl::new(setup_db().await));
    let auth = AuthService::new(repo.clone());

    let admin = auth.ensure_admin("admin@portal.test", "s3cret").await.unwrap();

    let resolved = auth.current_user("s3cret").await.unwrap().unwrap();
    assert_eq!(resolved.id, admin.id);
    assert!(auth.is_admin(&resolved).await.unwrap());

    assert!(auth.current_user("wrong").await.unwrap().is_none());
    assert!(auth.current_user("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_ensure_admin_rotates_token() {
    let repo = Arc::new(UserRepositoryImpl::new(setup_db().await));
    let auth = AuthService::new(repo.clone());

    let first = auth.ensure_admin("admin@portal.test", "old").await.unwrap();
    let second = auth.ensure_admin("admin@portal.test", "new").await.unwrap();

    assert_eq!(first.id, second.id);
    assert!(auth.current_user("old").await.unwrap().is_none());
    assert!(auth.current_user("new").await.unwrap().is_some());
}

#[tokio::test]
async fn test_other_roles_are_not_admin() {
    let repo = Arc::new(UserRepositoryImpl::new(setup_db().await));
    let viewer = repo
        .upsert_with_role("viewer@portal.test", &hash_token("view"), "viewer")
        .await
        .unwrap();

    assert!(repo.has_role(viewer.id, "viewer").await.unwrap());
    assert!(!repo.has_role(viewer.id, ADMIN_ROLE).await.unwrap());
    assert!(!AuthService::new(repo).is_admin(&viewer).await.unwrap());
}

//! Social-Graph HTTP Handlers
//!
//! This module contains the HTTP handlers for user registration and the
//! follow/unfollow/list operations. Handlers are thin: extract, validate,
//! delegate to the engine or directory, shape the response.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::directory::{Directory, UserDirectory};
use crate::backend::engine::{FollowOutcome, RelationshipEngine};
use crate::backend::error::BackendError;
use crate::shared::{Page, PageOptions, SocialError, User, UserSummary};

/// Request body for user registration
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Query parameters for the list endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Viewer providing classification context; defaults to the subject
    pub viewer: Option<Uuid>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListQuery {
    fn page_options(&self) -> PageOptions {
        let defaults = PageOptions::default();
        PageOptions::new(
            self.page.unwrap_or(defaults.page),
            self.page_size.unwrap_or(defaults.page_size),
        )
    }
}

/// Register a new user with empty follower/following lists
pub async fn create_user(
    State(directory): State<Directory>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, BackendError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(SocialError::validation("username", "must not be empty").into());
    }
    let full_name = request.full_name.trim();
    if full_name.is_empty() {
        return Err(SocialError::validation("fullName", "must not be empty").into());
    }

    let user = User::new(username, full_name, request.avatar);
    directory.insert(&user).await.map_err(|e| {
        tracing::error!("Failed to create user '{}': {:?}", username, e);
        e
    })?;

    tracing::info!(user_id = %user.id, username = %user.username, "user created");
    Ok(Json(user))
}

/// Fetch a user record by id
pub async fn get_user(
    State(directory): State<Directory>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, BackendError> {
    let user = directory
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| SocialError::not_found(format!("user {} not found", user_id)))?;

    Ok(Json(user))
}

/// Create a follow edge from `user_id` to `target_id`
pub async fn follow_user(
    State(engine): State<Arc<RelationshipEngine<Directory>>>,
    Path((user_id, target_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<FollowOutcome>, BackendError> {
    let outcome = engine.follow(user_id, target_id).await?;
    Ok(Json(outcome))
}

/// Remove the follow edge from `user_id` to `target_id`
pub async fn unfollow_user(
    State(engine): State<Arc<RelationshipEngine<Directory>>>,
    Path((user_id, target_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<FollowOutcome>, BackendError> {
    let outcome = engine.unfollow(user_id, target_id).await?;
    Ok(Json(outcome))
}

/// Page through the users who follow `subject_id`
pub async fn list_followers(
    State(engine): State<Arc<RelationshipEngine<Directory>>>,
    Path(subject_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<UserSummary>>, BackendError> {
    let viewer_id = query.viewer.unwrap_or(subject_id);
    let page = engine
        .list_followers(subject_id, viewer_id, query.page_options())
        .await?;
    Ok(Json(page))
}

/// Page through the users `subject_id` follows
pub async fn list_followings(
    State(engine): State<Arc<RelationshipEngine<Directory>>>,
    Path(subject_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<UserSummary>>, BackendError> {
    let viewer_id = query.viewer.unwrap_or(subject_id);
    let page = engine
        .list_followings(subject_id, viewer_id, query.page_options())
        .await?;
    Ok(Json(page))
}

//! Relationship engine tests
//!
//! Exercises the follow/unfollow operations against the in-memory directory:
//! the bidirectional list invariant, idempotence, error taxonomy, and the
//! post-mutation classification results.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use flock::backend::error::BackendError;
use flock::shared::{Relationship, SocialError};
use uuid::Uuid;

use crate::common::{engine, fetch, seed_user};

#[tokio::test]
async fn test_follow_creates_both_sides() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;

    let outcome = engine.follow(a, b).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::Following);

    let a_record = fetch(&engine, a).await;
    let b_record = fetch(&engine, b).await;
    assert_eq!(a_record.followings, vec![b]);
    assert_eq!(b_record.followers, vec![a]);
    // The reverse direction stays untouched.
    assert!(a_record.followers.is_empty());
    assert!(b_record.followings.is_empty());
}

#[tokio::test]
async fn test_follow_is_idempotent() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;

    engine.follow(a, b).await.unwrap();
    let outcome = engine.follow(a, b).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::Following);

    let a_record = fetch(&engine, a).await;
    let occurrences = a_record.followings.iter().filter(|id| **id == b).count();
    assert_eq!(occurrences, 1);

    let b_record = fetch(&engine, b).await;
    let occurrences = b_record.followers.iter().filter(|id| **id == a).count();
    assert_eq!(occurrences, 1);
}

#[tokio::test]
async fn test_self_follow_is_invalid() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;

    let err = engine.follow(a, a).await.unwrap_err();
    assert_matches!(
        err,
        BackendError::Social(SocialError::InvalidOperation { .. })
    );
}

#[tokio::test]
async fn test_self_unfollow_is_invalid() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;

    let err = engine.unfollow(a, a).await.unwrap_err();
    assert_matches!(
        err,
        BackendError::Social(SocialError::InvalidOperation { .. })
    );
}

#[tokio::test]
async fn test_follow_missing_user_is_not_found() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;

    let err = engine.follow(a, Uuid::new_v4()).await.unwrap_err();
    assert_matches!(err, BackendError::Social(SocialError::NotFound { .. }));

    let err = engine.follow(Uuid::new_v4(), a).await.unwrap_err();
    assert_matches!(err, BackendError::Social(SocialError::NotFound { .. }));
}

#[tokio::test]
async fn test_unfollow_without_edge_is_not_found() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;

    let err = engine.unfollow(a, b).await.unwrap_err();
    assert_matches!(err, BackendError::Social(SocialError::NotFound { .. }));
}

#[tokio::test]
async fn test_second_unfollow_is_not_found() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;

    engine.follow(a, b).await.unwrap();
    engine.unfollow(a, b).await.unwrap();

    let err = engine.unfollow(a, b).await.unwrap_err();
    assert_matches!(err, BackendError::Social(SocialError::NotFound { .. }));
}

#[tokio::test]
async fn test_follow_then_unfollow_restores_lists() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;
    let c = seed_user(&engine, "c").await;

    // Pre-existing edges that must survive the round trip.
    engine.follow(c, a).await.unwrap();
    engine.follow(b, c).await.unwrap();

    let a_before = fetch(&engine, a).await;
    let b_before = fetch(&engine, b).await;

    engine.follow(a, b).await.unwrap();
    let outcome = engine.unfollow(a, b).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::Follow);

    let a_after = fetch(&engine, a).await;
    let b_after = fetch(&engine, b).await;
    assert_eq!(a_after.followings, a_before.followings);
    assert_eq!(a_after.followers, a_before.followers);
    assert_eq!(b_after.followings, b_before.followings);
    assert_eq!(b_after.followers, b_before.followers);
}

#[tokio::test]
async fn test_mutual_follow_is_friend_from_both_views() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;

    engine.follow(a, b).await.unwrap();
    let outcome = engine.follow(b, a).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::Friend);

    let a_record = fetch(&engine, a).await;
    let b_record = fetch(&engine, b).await;
    assert_eq!(
        Relationship::classify(&a_record, &b_record),
        Relationship::Friend
    );
    assert_eq!(
        Relationship::classify(&b_record, &a_record),
        Relationship::Friend
    );
}

#[tokio::test]
async fn test_unfollow_from_mutual_leaves_follow_back() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;

    engine.follow(a, b).await.unwrap();
    engine.follow(b, a).await.unwrap();

    // a drops the edge; b still follows a.
    let outcome = engine.unfollow(a, b).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::FollowBack);
}

#[tokio::test]
async fn test_two_user_scenario() {
    let engine = engine();
    let u1 = seed_user(&engine, "u1").await;
    let u2 = seed_user(&engine, "u2").await;

    let outcome = engine.follow(u1, u2).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::Following);
    assert_eq!(fetch(&engine, u1).await.followings, vec![u2]);
    assert_eq!(fetch(&engine, u2).await.followers, vec![u1]);

    let outcome = engine.follow(u2, u1).await.unwrap();
    assert_eq!(outcome.relationship, Relationship::Friend);

    let u1_record = fetch(&engine, u1).await;
    let u2_record = fetch(&engine, u2).await;
    assert_eq!(u1_record.followings, vec![u2]);
    assert_eq!(u1_record.followers, vec![u2]);
    assert_eq!(u2_record.followings, vec![u1]);
    assert_eq!(u2_record.followers, vec![u1]);
}

#[tokio::test]
async fn test_concurrent_overlapping_follows_keep_invariant() {
    let engine = engine();
    let a = seed_user(&engine, "a").await;
    let b = seed_user(&engine, "b").await;
    let c = seed_user(&engine, "c").await;

    // Both mutations write a's record; the per-user locks must serialize
    // them so neither side's update is lost.
    let (first, second) = tokio::join!(engine.follow(a, b), engine.follow(c, a));
    first.unwrap();
    second.unwrap();

    let a_record = fetch(&engine, a).await;
    assert!(a_record.followings.contains(&b));
    assert!(a_record.followers.contains(&c));
    assert!(fetch(&engine, b).await.followers.contains(&a));
    assert!(fetch(&engine, c).await.followings.contains(&a));
}

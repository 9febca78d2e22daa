//! Property-based tests for relationship classification and the
//! follow/unfollow round trip

use proptest::prelude::*;

use flock::backend::directory::UserDirectory;
use flock::shared::{Relationship, User};

use crate::common::engine;

proptest! {
    /// The classification is exactly the four-case rule: mutual is friend,
    /// one direction each way, nothing is follow.
    #[test]
    fn test_classification_matches_rule_table(forward in any::<bool>(), reverse in any::<bool>()) {
        let mut viewer = User::new("viewer", "Viewer", None);
        let mut subject = User::new("subject", "Subject", None);

        if forward {
            viewer.followings.push(subject.id);
            subject.followers.push(viewer.id);
        }
        if reverse {
            subject.followings.push(viewer.id);
            viewer.followers.push(subject.id);
        }

        let expected = match (forward, reverse) {
            (true, true) => Relationship::Friend,
            (true, false) => Relationship::Following,
            (false, true) => Relationship::FollowBack,
            (false, false) => Relationship::Follow,
        };
        prop_assert_eq!(Relationship::classify(&viewer, &subject), expected);
    }

    /// follow(A,B) then unfollow(A,B) restores both users' lists, whatever
    /// edges existed beforehand.
    #[test]
    fn test_follow_unfollow_round_trip(b_follows_a in any::<bool>(), bystanders in 0usize..4) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let engine = engine();
            let a = User::new("a", "A", None);
            let b = User::new("b", "B", None);
            engine.directory().insert(&a).await.unwrap();
            engine.directory().insert(&b).await.unwrap();

            if b_follows_a {
                engine.follow(b.id, a.id).await.unwrap();
            }
            for i in 0..bystanders {
                let other = User::new(format!("other{}", i), "Other", None);
                engine.directory().insert(&other).await.unwrap();
                engine.follow(other.id, a.id).await.unwrap();
                engine.follow(b.id, other.id).await.unwrap();
            }

            let a_before = engine.directory().get_by_id(a.id).await.unwrap().unwrap();
            let b_before = engine.directory().get_by_id(b.id).await.unwrap().unwrap();

            engine.follow(a.id, b.id).await.unwrap();
            engine.unfollow(a.id, b.id).await.unwrap();

            let a_after = engine.directory().get_by_id(a.id).await.unwrap().unwrap();
            let b_after = engine.directory().get_by_id(b.id).await.unwrap().unwrap();

            assert_eq!(a_after.followings, a_before.followings);
            assert_eq!(a_after.followers, a_before.followers);
            assert_eq!(b_after.followings, b_before.followings);
            assert_eq!(b_after.followers, b_before.followers);
        });
    }
}

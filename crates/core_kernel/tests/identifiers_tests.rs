//! Tests for the identifier newtypes

use core_kernel::{ExpenseId, GroupId, MemberId};
use std::collections::HashSet;
use uuid::Uuid;

mod uuid_ids {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(GroupId::prefix(), "GRP");
        assert_eq!(ExpenseId::prefix(), "EXP");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid = Uuid::new_v4();
        let with_prefix: GroupId = format!("GRP-{}", uuid).parse().unwrap();
        let without_prefix: GroupId = uuid.to_string().parse().unwrap();

        assert_eq!(with_prefix, without_prefix);
        assert_eq!(with_prefix.as_uuid(), &uuid);
    }

    #[test]
    fn test_parse_rejects_invalid_uuid() {
        assert!("GRP-not-a-uuid".parse::<GroupId>().is_err());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let ids: HashSet<ExpenseId> = (0..100).map(|_| ExpenseId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = ExpenseId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = GroupId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}

mod member_ids {
    use super::*;

    #[test]
    fn test_member_id_equality_is_by_value() {
        assert_eq!(MemberId::from("alice"), MemberId::new(String::from("alice")));
        assert_ne!(MemberId::from("alice"), MemberId::from("Alice"));
    }

    #[test]
    fn test_member_id_display() {
        assert_eq!(MemberId::from("user-42").to_string(), "user-42");
    }

    #[test]
    fn test_member_id_deserializes_from_string() {
        let id: MemberId = serde_json::from_str("\"bob\"").unwrap();
        assert_eq!(id.as_str(), "bob");
        assert_eq!(id.into_inner(), "bob");
    }

    #[test]
    fn test_member_id_lookup_by_str() {
        let members: HashSet<MemberId> = ["alice", "bob"].into_iter().map(MemberId::from).collect();
        assert!(members.contains("alice"));
        assert!(!members.contains("carol"));
    }
}

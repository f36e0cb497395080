//! Integration tests for the public membership API.
//!
//! Every store is driven through `MembershipSet` the way an embedding
//! application would: insert a batch, query it, remove it in random order.

mod common;

use posmatrix_core::config::{GridBacking, HasherKind};
use posmatrix_core::digest::HashFn;
use posmatrix_core::{
    DeletionPolicy, Error, HashMatrix, LiteralMatrix, MatrixConfig, MembershipSet,
    PackedHashMatrix,
};
use rand::Rng;

/// Inserts every key, then removes them in random order, checking membership
/// of the removed key after each step.
fn insert_then_drain<S>(store: &mut S, keys: &[&S::Key], seed: u64)
where
    S: MembershipSet + ?Sized,
    S::Key: std::fmt::Debug,
{
    for key in keys {
        store.set(key).expect("set");
        assert!(store.contains(key), "{key:?} missing after set");
    }

    let mut rng = common::rng(seed);
    let mut pending: Vec<&S::Key> = keys.to_vec();
    while !pending.is_empty() {
        let key = pending.swap_remove(rng.gen_range(0..pending.len()));
        store.unset(key).expect("unset");
        assert!(!store.contains(key), "{key:?} present after unset");
    }
}

mod digest_stores {
    use super::*;

    #[test]
    fn test_bool_backing_insert_then_drain() {
        let mut rng = common::rng(1);
        let names = common::random_names(&mut rng, 2048, 255);
        let keys: Vec<&str> = names.iter().map(String::as_str).collect();

        insert_then_drain(&mut HashMatrix::new(), &keys, 2);
    }

    #[test]
    fn test_packed_backing_insert_then_drain() {
        let mut rng = common::rng(3);
        let names = common::random_names(&mut rng, 2048, 255);
        let keys: Vec<&str> = names.iter().map(String::as_str).collect();

        insert_then_drain(&mut PackedHashMatrix::new(), &keys, 4);
    }

    #[test]
    fn test_boxed_store_from_config() {
        let mut config = MatrixConfig::default();
        config.digest.backing = GridBacking::Packed;
        config.digest.hasher = HasherKind::Fx;

        let mut store = config.build_digest().expect("build");
        let mut rng = common::rng(5);
        let names = common::random_names(&mut rng, 512, 64);
        let keys: Vec<&str> = names.iter().map(String::as_str).collect();

        insert_then_drain(&mut *store, &keys, 6);
    }

    #[test]
    fn test_empty_string_never_member() {
        let mut store = PackedHashMatrix::new();

        store.set("").expect("set");
        store.unset("").expect("unset");

        assert!(!store.contains(""));
        assert!(store.is_empty());
    }

    #[test]
    fn test_colliding_pair_is_indistinguishable() {
        // Arrange - identical digests for every pair of equal-length keys
        let mut store = PackedHashMatrix::with_hasher(HashFn(|s: &str| s.len() as u64));

        // Act
        store.set("payments/api").expect("set");

        // Assert
        assert!(store.contains("billing/api1"));
        store.unset("billing/api1").expect("unset");
        assert!(!store.contains("payments/api"));
    }
}

mod literal_store {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_row_emptiness_insert_then_drain() {
        let mut rng = common::rng(7);
        let names = common::random_names(&mut rng, 1024, 128);
        let keys: Vec<Vec<char>> = names.iter().map(|n| n.chars().collect()).collect();
        let refs: Vec<&[char]> = keys.iter().map(Vec::as_slice).collect();

        let mut store = LiteralMatrix::with_policy(128, DeletionPolicy::RowEmptiness);
        insert_then_drain(&mut store, &refs, 8);
    }

    #[test]
    fn test_occupancy_count_insert_then_drain() {
        // Arrange - distinct keys long enough that no removed key is
        // assembled from the positions of the keys still live
        let mut rng = common::rng(10);
        let mut keys: Vec<Vec<char>> = (0..1024)
            .map(|_| {
                let len = rng.gen_range(16..=128);
                chars(&common::random_string(&mut rng, len, common::KUBERNETES_NAME_CHARS))
            })
            .collect();
        keys.sort_unstable();
        keys.dedup();
        let refs: Vec<&[char]> = keys.iter().map(Vec::as_slice).collect();

        // Act & Assert
        let mut store = LiteralMatrix::with_policy(128, DeletionPolicy::OccupancyCount);
        insert_then_drain(&mut store, &refs, 11);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remaining_keys_survive_removals() {
        // Arrange - one key per length
        let mut rng = common::rng(9);
        let keys: Vec<Vec<char>> = (1..=40)
            .map(|n| chars(&common::random_string(&mut rng, n, common::KUBERNETES_NAME_CHARS)))
            .collect();
        let mut store = MatrixConfig::default().build_literal().expect("build");
        for key in &keys {
            store.set(key).expect("set");
        }

        // Act & Assert
        for (i, key) in keys.iter().enumerate().rev() {
            store.unset(key).expect("unset");
            assert!(!store.contains(key));
            assert!(keys[..i].iter().all(|k| store.contains(k)));
        }
    }

    #[test]
    fn test_rejections_leave_store_unchanged() {
        let mut store = LiteralMatrix::new(8);
        store.set(&chars("ok")).expect("set");
        let before = store.pretty_print(2).expect("render");

        assert_eq!(
            store.set(&chars("way-too-long")),
            Err(Error::InvalidLength { length: 12, max: 8 })
        );
        assert_eq!(store.set(&chars("o_k")), Err(Error::InvalidCharacter('_')));
        assert_eq!(store.unset(&chars("o k")), Err(Error::InvalidCharacter(' ')));

        assert_eq!(store.pretty_print(2).expect("render"), before);
        assert_eq!(store.occupied_cells(), 2);
    }

    #[test]
    fn test_scenario_from_readme() {
        let mut store = LiteralMatrix::new(5);

        store.set(&['a', 'b', 'c']).expect("set");
        assert!(store.contains(&['a', 'b', 'c']));

        store.set(&['x', 'y']).expect("set");
        assert!(store.contains(&['a', 'b', 'c']));
        assert!(store.contains(&['x', 'y']));

        store.unset(&['a', 'b', 'c']).expect("unset");
        assert!(!store.contains(&['a', 'b', 'c']));
        assert!(store.contains(&['x', 'y']));
    }
}

use sequence_trie::{Error, StringTrie, Trie};
use std::collections::HashSet;

fn fruit() -> StringTrie<u32> {
    let mut trie = StringTrie::new();
    trie.insert("zebra", 5);
    trie.insert("apple", 1);
    trie.insert("banana", 2);
    trie.insert("cherry", 3);
    trie.insert("date", 4);
    trie.insert("apricot", 6);
    trie.insert("blueberry", 7);
    trie.insert("blackberry", 8);
    trie
}

#[test]
fn test_scenario_count_and_contains() {
    let mut trie = StringTrie::new();
    trie.insert("foo", "bar");
    trie.insert("bar", "foo");

    assert_eq!(trie.len(), 2);
    assert!(trie.contains_key("foo"));
    assert!(!trie.contains_key("baz"));
}

#[test]
fn test_scenario_prefix_counts() {
    let mut trie = StringTrie::new();
    trie.insert("ab", "ab");
    trie.insert("abc", "abc");
    trie.insert("abcd", "abcd");

    assert_eq!(trie.by_prefix("ab").count(), 3);
    assert_eq!(trie.by_prefix("abc").count(), 2);
    assert_eq!(trie.by_prefix("abcde").count(), 0);
}

#[test]
fn test_scenario_longest_prefix() {
    let mut trie = StringTrie::new();
    trie.insert("ab", "ab");
    trie.insert("abcd", "abcd");

    assert_eq!(trie.longest_prefix("abcdefg"), "abcd");
    assert_eq!(trie.longest_prefix("a"), "");
}

#[test]
fn test_scenario_missing_key_on_empty_trie() {
    let trie: StringTrie<u32> = StringTrie::new();

    assert_eq!(trie.get("anything"), Err(Error::KeyNotFound));
    let indexed = std::panic::catch_unwind(|| trie["anything"]);
    assert!(indexed.is_err());
}

#[test]
fn test_scenario_copy_to_overflow() {
    let mut trie = StringTrie::new();
    trie.insert("ab", 1);
    trie.insert("abcd", 2);
    let mut buffer: Vec<Option<(String, i32)>> = vec![None];

    let result = trie.copy_to(&mut buffer, 0);

    assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
    assert_eq!(buffer.iter().filter(|slot| slot.is_some()).count(), 1);
}

#[test]
fn test_prefix_lexicographic_iteration() {
    let trie = fruit();

    let a_keys: Vec<String> = trie.by_prefix("a").map(|(k, _)| k).collect();
    assert_eq!(a_keys, vec!["apple", "apricot"]);

    let b_keys: Vec<String> = trie.by_prefix("b").map(|(k, _)| k).collect();
    assert_eq!(b_keys, vec!["banana", "blackberry", "blueberry"]);

    let mut complex = StringTrie::new();
    complex.insert("abcg", 4);
    complex.insert("abd", 5);
    complex.insert("abce", 2);
    complex.insert("abcd", 1);
    complex.insert("abcf", 3);

    let abc_keys: Vec<String> = complex.by_prefix("abc").map(|(k, _)| k).collect();
    assert_eq!(abc_keys, vec!["abcd", "abce", "abcf", "abcg"]);
}

#[test]
fn test_prefix_nonexistent() {
    let trie = fruit();

    assert_eq!(trie.by_prefix("xyz").count(), 0);
    assert_eq!(trie.by_prefix("applesauce").count(), 0);
    assert!(!trie.contains_prefix("xyz"));
}

#[test]
fn test_prefix_that_is_not_a_key() {
    let mut trie = StringTrie::new();
    trie.insert("hello", 1);
    trie.insert("help", 2);

    assert!(!trie.contains_key("he"));
    assert!(trie.contains_prefix("he"));

    let results: HashSet<(String, i32)> = trie.by_prefix("he").map(|(k, v)| (k, *v)).collect();
    let expected: HashSet<(String, i32)> = vec![("hello".to_string(), 1), ("help".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(results, expected);
}

#[test]
fn test_prefix_nested() {
    let mut trie = StringTrie::new();
    trie.insert("a", 1);
    trie.insert("ab", 2);
    trie.insert("abc", 3);
    trie.insert("abcd", 4);

    assert_eq!(trie.by_prefix("a").count(), 4);
    assert_eq!(trie.by_prefix("ab").count(), 3);
    assert_eq!(trie.by_prefix("abc").count(), 2);

    let under_ab: Vec<String> = trie.by_prefix("ab").map(|(k, _)| k).collect();
    assert_eq!(under_ab, vec!["ab", "abc", "abcd"]);
}

#[test]
fn test_prefix_empty_matches_everything() {
    let trie = fruit();

    assert_eq!(trie.by_prefix("").count(), trie.len());
    assert_eq!(
        trie.by_prefix("").map(|(k, _)| k).collect::<Vec<_>>(),
        trie.keys()
    );
}

#[test]
fn test_prefix_iter_is_lazy_and_cloneable() {
    let trie = fruit();

    let mut iter = trie.by_prefix("b");
    let first = iter.next();
    let rest: Vec<String> = iter.clone().map(|(k, _)| k).collect();

    assert_eq!(first, Some(("banana".to_string(), &2)));
    assert_eq!(rest, vec!["blackberry", "blueberry"]);
    assert_eq!(iter.count(), 2);
}

#[test]
fn test_pruning_leaves_no_residue() {
    let mut trie = StringTrie::new();
    trie.insert("abc", 1);

    assert!(trie.remove("abc"));

    assert_eq!(trie.len(), 0);
    assert_eq!(trie.by_prefix("").count(), 0);
    assert!(!trie.contains_prefix("a"));
}

#[test]
fn test_remove_then_reinsert_keeps_order() {
    let mut trie = fruit();

    trie.remove("banana");
    trie.remove("apple");
    trie.insert("banana", 20);
    trie.insert("avocado", 9);

    assert_eq!(
        trie.keys(),
        vec![
            "apricot",
            "avocado",
            "banana",
            "blackberry",
            "blueberry",
            "cherry",
            "date",
            "zebra"
        ]
    );
}

#[test]
fn test_iterate_by_reference() {
    let trie = fruit();

    let mut total = 0;
    for (_, value) in &trie {
        total += value;
    }

    assert_eq!(total, 36);
}

#[test]
fn test_generic_element_type() {
    let mut trie: Trie<Vec<u8>, &str> = Trie::new();
    trie.insert(&[10u8, 0, 0, 1][..], "host");
    trie.insert(&[10u8][..], "net");
    trie.insert(&[10u8, 0][..], "subnet");

    assert_eq!(trie.longest_prefix(&[10u8, 0, 0, 7][..]), vec![10, 0]);
    assert_eq!(
        trie.longest_prefix_entry(&[10u8, 0, 0, 1, 5][..]),
        Some((vec![10, 0, 0, 1], &"host"))
    );
    assert_eq!(trie.longest_prefix(&[192u8][..]), Vec::<u8>::new());
}

//! Examples of using the trie
use sequence_trie::{StringTrie, Trie};

fn main() {
    env_logger::init();

    // Create a new trie with string keys
    let mut trie = StringTrie::<i32>::new();

    // Insert some values
    trie.insert("hello", 1);
    trie.insert("help", 2);
    trie.insert("world", 3);

    // Check values
    assert_eq!(trie.try_get("hello"), Some(&1));
    assert_eq!(trie["world"], 3);
    assert!(trie.get("missing").is_err());

    // Prefix queries
    for (key, value) in trie.by_prefix("hel") {
        println!("{} => {}", key, value);
    }
    println!("longest prefix of 'helpless': {:?}", trie.longest_prefix("helpless"));

    // Removal prunes the path
    trie.remove("help");
    println!("after removal: {:?}", trie);

    // Token keys work the same way
    let mut paths: Trie<Vec<&str>, u32> = Trie::new();
    paths.insert(&["usr", "local", "bin"][..], 755);
    paths.insert(&["usr", "lib"][..], 644);
    println!("paths under /usr: {}", paths.by_prefix(&["usr"][..]).count());
}

//! Example: building a Wordlist wrapper around a radix trie.
//!
//! This shows how to create a convenient high-level API on top of the raw
//! node interface. The `Wordlist` struct wraps a `Dictionary` and provides
//! word lookup, prefix checking, and listing.
//!
//! Run with: cargo run --example wordlist

use radixdict::radix::owned::Dictionary;
use radixdict::radix::RadixNode;

/// A convenient wrapper around a dictionary for word validation.
struct Wordlist {
    dict: Dictionary,
}

impl Wordlist {
    fn new(dict: Dictionary) -> Self {
        Wordlist { dict }
    }

    /// Returns true if the word is in the wordlist.
    fn is_word(&self, word: &str) -> bool {
        self.dict.contains(word)
    }

    /// Returns true if any word in the wordlist starts with the given prefix.
    ///
    /// Unlike exact lookups, a prefix may end in the middle of an edge label.
    fn has_prefix(&self, prefix: &str) -> bool {
        let text = self.dict.text();
        let mut node: &RadixNode = self.dict.root();
        let mut rest = prefix.as_bytes();
        while !rest.is_empty() {
            let Some(child) = node.children().find(|c| c.label(text).first() == rest.first()) else {
                return false;
            };
            let label = child.label(text);
            let n = label.len().min(rest.len());
            if label[..n] != rest[..n] {
                return false;
            }
            rest = &rest[n..];
            node = child;
        }
        true
    }

    /// Returns all words in the wordlist.
    fn all_words(&self) -> Vec<String> {
        self.dict
            .keys()
            .into_iter()
            .map(|k| String::from_utf8_lossy(&k).into_owned())
            .collect()
    }
}

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let wordlist = Wordlist::new(Dictionary::from_words(words).unwrap());

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    // List all words
    println!("\nAll words: {:?}", wordlist.all_words());

    // Tree shape
    println!("\nTrie:\n{:#}", wordlist.dict.dump());
}

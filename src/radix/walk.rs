//! Depth-first traversal: key enumeration, tree dumps and invariant checks.

use std::fmt;

use mark_last::MarkLastIterator;
use smallvec::SmallVec;
use thiserror::Error;

use super::node::RadixNode;
use super::span::Span;
use super::text::TextBuffer;

type KeyPath = SmallVec<[u8; 64]>;

/// Visits every node below and including `root` in depth-first order,
/// passing the full path spelled from `root` down to the node.
pub fn visit<'n>(root: &'n RadixNode, text: &TextBuffer, mut f: impl FnMut(&[u8], &'n RadixNode)) {
    let mut path = KeyPath::new();
    visit_node(root, text, &mut path, &mut f);
}

fn visit_node<'n, F>(node: &'n RadixNode, text: &TextBuffer, path: &mut KeyPath, f: &mut F)
where
    F: FnMut(&[u8], &'n RadixNode),
{
    let len = path.len();
    path.extend_from_slice(node.label(text));
    f(&path[..], node);
    for child in node.children() {
        visit_node(child, text, path, f);
    }
    path.truncate(len);
}

/// Returns every key stored below `root`, in depth-first, insertion order.
pub fn keys(root: &RadixNode, text: &TextBuffer) -> Vec<Vec<u8>> {
    let mut keys = Vec::new();
    visit(root, text, |path, node| {
        if node.is_final() {
            keys.push(path.to_vec());
        }
    });
    keys
}

/// Number of keys stored below `root`.
pub fn key_count(root: &RadixNode, text: &TextBuffer) -> usize {
    let mut count = 0;
    visit(root, text, |_, node| count += node.is_final() as usize);
    count
}

/// A structural defect found by [`check_invariants`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    /// The root node carries a label.
    #[error("root label {span} is not empty")]
    RootLabel {
        /// The root's span.
        span: Span,
    },
    /// A non-root node has an empty label.
    #[error("empty edge label below {path:?}")]
    EmptyLabel {
        /// Path spelled down to the parent.
        path: String,
    },
    /// A label does not lie within the text buffer.
    #[error("label {span} is out of bounds for a text buffer of {len} bytes")]
    OutOfBounds {
        /// The offending span.
        span: Span,
        /// Length of the text buffer.
        len: usize,
    },
    /// Two siblings start with the same byte.
    #[error("two children of {path:?} start with byte {byte:#04x}")]
    DuplicateFirstByte {
        /// Path spelled down to the parent.
        path: String,
        /// The shared first byte.
        byte: u8,
    },
}

/// Checks the structural invariants of the tree rooted at `root`: the root
/// label is empty, every other label is non-empty and within the buffer,
/// and no two siblings share a first byte.
pub fn check_invariants(root: &RadixNode, text: &TextBuffer) -> Result<(), InvariantError> {
    if !root.span().is_empty() {
        return Err(InvariantError::RootLabel { span: root.span() });
    }
    let mut path = KeyPath::new();
    check_node(root, text, &mut path)
}

fn check_node(node: &RadixNode, text: &TextBuffer, path: &mut KeyPath) -> Result<(), InvariantError> {
    let len = path.len();
    path.extend_from_slice(node.label(text));

    let mut seen = [false; 256];
    for child in node.children() {
        let span = child.span();
        if span.is_empty() {
            return Err(InvariantError::EmptyLabel {
                path: String::from_utf8_lossy(&path[..]).into_owned(),
            });
        }
        if !span.fits(text.len()) {
            return Err(InvariantError::OutOfBounds {
                span,
                len: text.len(),
            });
        }
        let byte = text.as_bytes()[span.begin];
        if std::mem::replace(&mut seen[byte as usize], true) {
            return Err(InvariantError::DuplicateFirstByte {
                path: String::from_utf8_lossy(&path[..]).into_owned(),
                byte,
            });
        }
        check_node(child, text, path)?;
    }

    path.truncate(len);
    Ok(())
}

/// A printable rendering of a trie, one node per line.
///
/// The plain form indents each label by the length of the path above it and
/// marks final nodes with ` [*]`. The alternate form (`{:#}`) draws the tree
/// with branch connectors instead.
pub struct TreeDump<'a> {
    root: &'a RadixNode,
    text: &'a TextBuffer,
}

impl<'a> TreeDump<'a> {
    /// Creates a dump of the tree rooted at `root`.
    pub fn new(root: &'a RadixNode, text: &'a TextBuffer) -> Self {
        TreeDump { root, text }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, node: &RadixNode, indent: usize) -> fmt::Result {
        let label = node.label(self.text);
        write!(f, "{:indent$}{}", "", String::from_utf8_lossy(label))?;
        write_final(f, node)?;
        for child in node.children() {
            self.write_indented(f, child, indent + label.len())?;
        }
        Ok(())
    }

    fn write_branches(&self, f: &mut fmt::Formatter<'_>, node: &RadixNode, prefix: &mut String) -> fmt::Result {
        for (last, child) in node.children().mark_last() {
            let (branch, stem) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
            write!(f, "{prefix}{branch}{}", String::from_utf8_lossy(child.label(self.text)))?;
            write_final(f, child)?;
            let len = prefix.len();
            prefix.push_str(stem);
            self.write_branches(f, child, prefix)?;
            prefix.truncate(len);
        }
        Ok(())
    }
}

fn write_final(f: &mut fmt::Formatter<'_>, node: &RadixNode) -> fmt::Result {
    if node.is_final() {
        f.write_str(" [*]")?;
    }
    f.write_str("\n")
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(".")?;
            write_final(f, self.root)?;
            self.write_branches(f, self.root, &mut String::new())
        } else {
            self.write_indented(f, self.root, 0)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::radix::budget::{NodeBudget, TrieOptions};

    fn build(words: &[&str]) -> (TextBuffer, RadixNode) {
        let (text, spans) = TextBuffer::from_words(words);
        let mut root = RadixNode::root();
        let mut budget = NodeBudget::new(TrieOptions::default());
        for span in spans {
            root.insert(&text, span, &mut budget).unwrap();
        }
        (text, root)
    }

    #[test]
    fn keys_round_trip() {
        let (text, root) = build(&["apple", "app", "apricot", "banana", "band", "app"]);
        let mut got = keys(&root, &text);
        got.sort();
        assert_eq!(got, [&b"app"[..], b"apple", b"apricot", b"banana", b"band"]);
        assert_eq!(key_count(&root, &text), 5);
    }

    #[test]
    fn keys_include_empty_key() {
        let (text, root) = build(&["", "a"]);
        assert_eq!(keys(&root, &text), [&b""[..], b"a"]);
    }

    #[test]
    fn visit_sees_every_node_with_full_path() {
        let (text, root) = build(&["car", "cat"]);
        let mut seen = Vec::new();
        visit(&root, &text, |path, node| seen.push((path.to_vec(), node.is_final())));
        assert_eq!(
            seen,
            [
                (b"".to_vec(), false),
                (b"ca".to_vec(), false),
                (b"car".to_vec(), true),
                (b"cat".to_vec(), true),
            ]
        );
    }

    #[test]
    fn plain_dump_indents_by_path_length() {
        let (text, root) = build(&["apple", "app", "apricot"]);
        let dump = TreeDump::new(&root, &text).to_string();
        assert_eq!(dump, "\nap\n  p [*]\n   le [*]\n  ricot [*]\n");
    }

    #[test]
    fn alternate_dump_draws_branches() {
        let (text, root) = build(&["apple", "app", "apricot"]);
        let dump = format!("{:#}", TreeDump::new(&root, &text));
        let expected = "\
.
└── ap
    ├── p [*]
    │   └── le [*]
    └── ricot [*]
";
        assert_eq!(dump, expected);
    }

    #[test]
    fn built_trie_satisfies_invariants() {
        let (text, root) = build(&["romane", "romanus", "romulus", "rubens", "ruber", "rubicon", "rubicundus"]);
        assert_eq!(check_invariants(&root, &text), Ok(()));
    }

    #[test]
    fn duplicate_first_byte_is_reported() {
        let (text, spans) = TextBuffer::from_words(["ab", "ac"]);
        let mut root = RadixNode::root();
        root.push_child_unchecked(RadixNode::new(spans[0], true));
        root.push_child_unchecked(RadixNode::new(spans[1], true));
        assert_eq!(
            check_invariants(&root, &text),
            Err(InvariantError::DuplicateFirstByte {
                path: String::new(),
                byte: b'a',
            })
        );
    }

    #[test]
    fn empty_label_is_reported() {
        let (text, spans) = TextBuffer::from_words(["ab"]);
        let mut root = RadixNode::root();
        let mut ab = RadixNode::new(spans[0], true);
        ab.push_child_unchecked(RadixNode::new(Span::new(1, 1), true));
        root.push_child_unchecked(ab);
        assert_eq!(
            check_invariants(&root, &text),
            Err(InvariantError::EmptyLabel {
                path: "ab".to_string(),
            })
        );
    }

    #[test]
    fn root_label_is_reported() {
        let (text, _) = TextBuffer::from_words(["xy"]);
        let root = RadixNode::new(Span::new(0, 2), false);
        assert!(matches!(
            check_invariants(&root, &text),
            Err(InvariantError::RootLabel { .. })
        ));
    }
}

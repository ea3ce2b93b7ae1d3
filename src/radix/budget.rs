//! Node allocation accounting.
//!
//! Every node linked into a trie passes through a [`NodeBudget`], which
//! tracks how many nodes are live and turns both allocator failure and an
//! exhausted node limit into [`TrieError::Allocation`].

use crate::error::{Result, TrieError};

/// Options controlling how a trie is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieOptions {
    /// Maximum number of nodes the trie may hold, root included.
    /// `None` means unlimited.
    pub max_nodes: Option<usize>,
}

impl TrieOptions {
    /// Limits the trie to `max_nodes` nodes.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

/// Counts the nodes of one trie and enforces its node limit.
#[derive(Clone, Debug)]
pub(crate) struct NodeBudget {
    live: usize,
    limit: Option<usize>,
}

impl NodeBudget {
    /// Creates a budget that already accounts for the root node.
    pub(crate) fn new(options: TrieOptions) -> Self {
        NodeBudget {
            live: 1,
            limit: options.max_nodes,
        }
    }

    /// Checks that one more node may be created, without committing it.
    pub(crate) fn check(&self) -> Result<()> {
        match self.limit {
            Some(limit) if self.live >= limit => Err(self.exhausted()),
            _ => Ok(()),
        }
    }

    /// Records a node that has been linked into the trie.
    ///
    /// Callers must have passed [`check`](NodeBudget::check) first.
    pub(crate) fn commit(&mut self) {
        debug_assert!(self.check().is_ok());
        self.live += 1;
    }

    /// Reserves room for `additional` more entries in `slots`, reporting
    /// allocator failure as [`TrieError::Allocation`].
    pub(crate) fn reserve<T>(&self, slots: &mut Vec<T>, additional: usize) -> Result<()> {
        slots
            .try_reserve(additional)
            .map_err(|_| self.exhausted())
    }

    /// Number of nodes currently live, root included.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    fn exhausted(&self) -> TrieError {
        TrieError::Allocation { nodes: self.live }
    }
}

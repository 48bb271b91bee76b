// lib/src/decision_tree.rs

//! Exact-match lookup over sequences of criteria.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A
//! `(parent, value) -> child` map gives constant-time child lookup and
//! guarantees that no two children of a node share a value. The root holds
//! no value and is never reported.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use models::{BreedTraits, Identifier, TRAIT_COUNT};

/// Index of a node in a [`DecisionTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Clone, Debug)]
struct TreeNode<T> {
    value: Option<T>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct DecisionTree<T> {
    nodes: Vec<TreeNode<T>>,
    edges: HashMap<(NodeId, T), NodeId>,
}

impl<T> Default for DecisionTree<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DecisionTree<T>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        DecisionTree {
            nodes: vec![TreeNode {
                value: None,
                children: Vec::new(),
            }],
            edges: HashMap::new(),
        }
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walks from the root along `items`, creating every missing child.
    /// Inserting an empty sequence changes nothing.
    pub fn insert_sequence<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut current = NodeId::ROOT;
        for item in items {
            current = match self.edges.get(&(current, item.clone())) {
                Some(&child) => child,
                None => self.push_child(current, item),
            };
        }
    }

    fn push_child(&mut self, parent: NodeId, value: T) -> NodeId {
        let child = NodeId(self.nodes.len());
        trace!("New node {:?} under {:?} for {:?}", child, parent, value);
        self.nodes.push(TreeNode {
            value: Some(value.clone()),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(child);
        self.edges.insert((parent, value), child);
        child
    }

    /// Node reached by following `choices` from the root, if every step
    /// matches a child.
    pub fn find<'a, I>(&self, choices: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut current = NodeId::ROOT;
        for choice in choices {
            current = *self.edges.get(&(current, choice.clone()))?;
        }
        Some(current)
    }

    /// Values of the children of the node reached by `choices`, in insertion
    /// order. A miss at any step yields an empty list.
    pub fn lookup<'a, I>(&self, choices: I) -> Vec<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        match self.find(choices) {
            Some(node) => self.nodes[node.0]
                .children
                .iter()
                .filter_map(|child| self.nodes[child.0].value.clone())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Criterion stored in a [`BreedDecisionTree`]: trait values on every level
/// but the last, which holds the breed names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeKey {
    Trait(u8),
    Breed(Identifier),
}

impl fmt::Display for TreeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeKey::Trait(value) => write!(f, "{}", value),
            TreeKey::Breed(name) => write!(f, "{}", name),
        }
    }
}

/// Decision tree over the twelve trait values of each breed.
#[derive(Clone, Debug, Default)]
pub struct BreedDecisionTree {
    tree: DecisionTree<TreeKey>,
}

impl BreedDecisionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_breeds(breeds: &[BreedTraits]) -> Self {
        let mut tree = Self::new();
        for breed in breeds {
            tree.insert_breed(breed);
        }
        debug!(
            "Built breed decision tree from {} breeds with {} nodes",
            breeds.len(),
            tree.tree.node_count()
        );
        tree
    }

    pub fn insert_breed(&mut self, breed: &BreedTraits) {
        let path = breed
            .values()
            .into_iter()
            .map(TreeKey::Trait)
            .chain(std::iter::once(TreeKey::Breed(breed.name)));
        self.tree.insert_sequence(path);
    }

    /// Breeds whose twelve trait values equal `traits` exactly.
    pub fn lookup_breeds(&self, traits: &[u8; TRAIT_COUNT]) -> Vec<Identifier> {
        let choices: Vec<TreeKey> = traits.iter().copied().map(TreeKey::Trait).collect();
        self.tree
            .lookup(&choices)
            .into_iter()
            .filter_map(|key| match key {
                TreeKey::Breed(name) => Some(name),
                TreeKey::Trait(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn lookup_returns_children_of_matched_prefix() {
        let mut tree = DecisionTree::new();
        tree.insert_sequence(path(&["1", "2", "3", "Beagle"]));
        tree.insert_sequence(path(&["1", "2", "4", "Pug"]));

        assert_eq!(tree.lookup(&path(&["1", "2"])), path(&["3", "4"]));
        assert_eq!(tree.lookup(&path(&["1", "2", "3"])), path(&["Beagle"]));
        assert_eq!(tree.lookup(&path(&["1", "2", "4"])), path(&["Pug"]));
    }

    #[test]
    fn unseen_path_is_empty_not_an_error() {
        let mut tree = DecisionTree::new();
        tree.insert_sequence(path(&["1", "2", "3", "Beagle"]));

        assert!(tree.lookup(&path(&["1", "9"])).is_empty());
        assert!(tree.lookup(&path(&["1", "2", "3", "Beagle"])).is_empty());
        assert!(tree.find(&path(&["7"])).is_none());
    }

    #[test]
    fn shared_prefixes_are_not_duplicated() {
        let mut tree = DecisionTree::new();
        tree.insert_sequence(path(&["a", "b"]));
        tree.insert_sequence(path(&["a", "b"]));
        tree.insert_sequence(path(&["a", "c"]));
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.lookup(&path(&["a"])), path(&["b", "c"]));
    }

    #[test]
    fn empty_insert_is_a_no_op_and_empty_lookup_lists_first_level() {
        let mut tree: DecisionTree<String> = DecisionTree::new();
        tree.insert_sequence(Vec::new());
        assert_eq!(tree.node_count(), 1);
        assert!(tree.lookup(&[]).is_empty());

        tree.insert_sequence(path(&["x"]));
        assert_eq!(tree.lookup(&[]), path(&["x"]));
    }

    #[test]
    fn breed_tree_matches_exact_trait_vectors() {
        let beagle = BreedTraits::from_values(
            Identifier::new("Beagle").unwrap(),
            [3, 5, 5, 3, 3, 4, 2, 4, 3, 4, 4, 4],
        );
        let harrier = BreedTraits::from_values(
            Identifier::new("Harrier").unwrap(),
            [3, 5, 5, 3, 3, 4, 2, 4, 3, 4, 4, 4],
        );
        let pug = BreedTraits::from_values(
            Identifier::new("Pug").unwrap(),
            [5, 5, 4, 4, 5, 5, 3, 5, 4, 3, 1, 3],
        );
        let tree = BreedDecisionTree::from_breeds(&[beagle.clone(), pug.clone(), harrier]);

        let names: Vec<String> = tree
            .lookup_breeds(&beagle.values())
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, vec!["Beagle", "Harrier"]);
        assert_eq!(tree.lookup_breeds(&pug.values()), vec![pug.name]);
        assert!(tree.lookup_breeds(&[1; TRAIT_COUNT]).is_empty());
    }
}

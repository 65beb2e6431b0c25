//! Inflection form trees.
//!
//! An entry's forms are an arbitrarily nested structure of labeled groups and lists whose
//! leaves are word forms. Only the leaves matter for matching; the labels and nesting are
//! kept so the structure can be displayed and serialized back unchanged.

use std::{fmt, slice};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};

/// A node in an entry's forms tree.
///
/// In JSON a string is a [`Leaf`](Self::Leaf), an array is a
/// [`Sequence`](Self::Sequence), an object is a [`Group`](Self::Group) and `null` is
/// [`Empty`](Self::Empty).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormNode {
    /// No forms.
    #[default]
    Empty,

    /// A single word form.
    Leaf(String),

    /// An ordered list of nodes.
    Sequence(Vec<Self>),

    /// Nodes keyed by a grammatical label (case, tense, person...).
    Group(FormGroup),
}

impl FormNode {
    /// Returns an iterator over every leaf in depth-first order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// Returns the number of leaves in this tree.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Returns true if the tree holds no leaves.
    pub fn is_empty(&self) -> bool {
        self.leaves().next().is_none()
    }

    /// Returns every leaf paired with the labels on the path leading to it.
    ///
    /// Sequence positions contribute no label.
    pub fn labeled_leaves(&self) -> Vec<(Vec<&str>, &str)> {
        let mut out = Vec::new();
        collect_labeled(self, &mut Vec::new(), &mut out);
        out
    }
}

/// Recursive worker for [`FormNode::labeled_leaves`].
fn collect_labeled<'a>(
    node: &'a FormNode,
    path: &mut Vec<&'a str>,
    out: &mut Vec<(Vec<&'a str>, &'a str)>,
) {
    match node {
        FormNode::Empty => {}
        FormNode::Leaf(form) => out.push((path.clone(), form)),
        FormNode::Sequence(items) => {
            for item in items {
                collect_labeled(item, path, out);
            }
        }
        FormNode::Group(groups) => {
            for (label, child) in groups.iter() {
                path.push(label);
                collect_labeled(child, path, out);
                path.pop();
            }
        }
    }
}

/// Labeled child nodes, kept in the order they were read.
///
/// A repeated label replaces the earlier node in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormGroup(Vec<(String, FormNode)>);

impl FormGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a labeled node, replacing any node already under `label`.
    pub fn insert(&mut self, label: impl Into<String>, node: FormNode) {
        let label = label.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = node,
            None => self.0.push((label, node)),
        }
    }

    /// Returns the node under `label`.
    pub fn get(&self, label: &str) -> Option<&FormNode> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, node)| node)
    }

    /// Returns the labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(label, _)| label.as_str())
    }

    /// Returns the labeled nodes in order.
    pub fn iter(&self) -> GroupIter<'_> {
        GroupIter {
            inner: self.0.iter(),
        }
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the group has no labels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, FormNode)> for FormGroup {
    fn from_iter<I: IntoIterator<Item = (L, FormNode)>>(iter: I) -> Self {
        let mut group = Self::new();
        for (label, node) in iter {
            group.insert(label, node);
        }
        group
    }
}

impl<'a> IntoIterator for &'a FormGroup {
    type Item = (&'a str, &'a FormNode);
    type IntoIter = GroupIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the labeled nodes of a [`FormGroup`].
pub struct GroupIter<'a> {
    /// Remaining pairs.
    inner: slice::Iter<'a, (String, FormNode)>,
}

impl<'a> Iterator for GroupIter<'a> {
    type Item = (&'a str, &'a FormNode);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(label, node)| (label.as_str(), node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for GroupIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(label, node)| (label.as_str(), node))
    }
}

impl Serialize for FormGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for FormGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GroupVisitor)
    }
}

/// Reads a JSON object into a [`FormGroup`] without reordering its keys.
struct GroupVisitor;

impl<'de> Visitor<'de> for GroupVisitor {
    type Value = FormGroup;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of labeled forms")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut group = FormGroup::new();
        while let Some((label, node)) = map.next_entry::<String, FormNode>()? {
            group.insert(label, node);
        }
        Ok(group)
    }
}

/// Depth-first iterator over the leaves of a [`FormNode`].
pub struct Leaves<'a> {
    /// Nodes still to visit, next on top.
    stack: Vec<&'a FormNode>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                FormNode::Empty => {}
                FormNode::Leaf(form) => return Some(form),
                FormNode::Sequence(items) => self.stack.extend(items.iter().rev()),
                FormNode::Group(groups) => self.stack.extend(groups.iter().rev().map(|(_, v)| v)),
            }
        }
        None
    }
}

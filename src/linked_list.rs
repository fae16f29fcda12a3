//! A singly linked list of `i32`s that can be parsed from bracketed, comma separated strings
//! and rendered as an arrow separated chain.
//!
//! # Examples
//!
//! ```
//! use binary_trees::linked_list::LinkedList;
//!
//! let list: LinkedList = "[1, 2, 3]".parse().unwrap();
//! assert_eq!(list.to_string(), "1->2->3");
//!
//! let empty: LinkedList = "[]".parse().unwrap();
//! assert_eq!(empty.to_string(), "Empty LinkedList");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::ParseListError;

/// What a list with no nodes renders as.
const EMPTY_LIST: &str = "Empty LinkedList";

/// Parses a string such as `"[1, 2, 3]"` into its integers. Surrounding whitespace and the
/// brackets are optional, as is whitespace around each integer.
///
/// # Errors
///
/// - [`ParseListError::UnbalancedBrackets`] if only one of `[` and `]` is present.
/// - [`ParseListError::InvalidInteger`] if any comma separated token isn't an `i32`. Note
///   that this includes the empty token of a trailing comma.
///
/// # Examples
///
/// ```
/// use binary_trees::linked_list::parse_integers;
///
/// assert_eq!(parse_integers(" [4, -5,6] "), Ok(vec![4, -5, 6]));
/// assert_eq!(parse_integers("4,5"), Ok(vec![4, 5]));
/// assert_eq!(parse_integers("[ ]"), Ok(vec![]));
/// assert!(parse_integers("[4, five]").is_err());
/// ```
pub fn parse_integers(input: &str) -> Result<Vec<i32>, ParseListError> {
    let trimmed = input.trim();
    let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => {
            return Err(ParseListError::UnbalancedBrackets {
                input: trimmed.to_string(),
            })
        }
    };

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values = inner
        .split(',')
        .map(str::trim)
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|source| ParseListError::InvalidInteger {
                    token: token.to_string(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(len = values.len(), "parsed list");

    Ok(values)
}

/// One value and the rest of the list after it. Nodes only exist inside a [`LinkedList`],
/// which owns the whole chain.
pub struct ListNode {
    val: i32,
    next: Option<Box<ListNode>>,
}

impl fmt::Debug for ListNode {
    // Only this node; following `next` would recurse once per node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("val", &self.val)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

impl ListNode {
    fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// The value stored in this node.
    pub fn val(&self) -> i32 {
        self.val
    }

    /// The following node, if any.
    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }
}

/// An owned, singly linked list.
#[derive(Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl Drop for LinkedList {
    // Boxes drop recursively by default which would overflow the stack on a long list.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromStr for LinkedList {
    type Err = ParseListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_integers(s).map(|values| values.into_iter().collect())
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for val in iter {
            tail = &mut tail.insert(Box::new(ListNode::new(val))).next;
            list.len += 1;
        }
        list
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_LIST);
        }

        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{val}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl LinkedList {
    /// Generate a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// The number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    /// The values from front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head() }
    }
}

/// Iterator over the values of a [`LinkedList`], created by [`LinkedList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.next?;
        self.next = node.next();
        Some(node.val)
    }
}

impl FusedIterator for Iter<'_> {}

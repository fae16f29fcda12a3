use std::num::ParseIntError;

use thiserror::Error;

/// Errors returned by [`Tree`](crate::Tree) queries and [`count_trees`](crate::count_trees).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs at least one node.
    #[error("tree is empty")]
    EmptyTree,

    /// Trees can only be counted for a non-negative number of keys.
    #[error("cannot count trees holding a negative number of keys ({0})")]
    NegativeKeyCount(i32),

    /// The number of distinct trees does not fit in a `u64`.
    #[error("number of distinct trees holding {0} keys overflows a u64")]
    CountOverflow(i32),
}

/// Errors returned when parsing a [`LinkedList`](crate::linked_list::LinkedList)
/// from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseListError {
    /// Only one of the opening `[` and closing `]` was present.
    #[error("unbalanced brackets in {input:?}")]
    UnbalancedBrackets {
        /// The trimmed input.
        input: String,
    },

    /// A comma separated token wasn't an `i32`.
    #[error("invalid integer {token:?}")]
    InvalidInteger {
        /// The offending token, trimmed.
        token: String,
        /// Why it didn't parse.
        #[source]
        source: ParseIntError,
    },
}

use std::error;
use std::fmt;

/// A broken structural invariant reported by `verify`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Violation {
    /// An element is not strictly between the bounds imposed by its ancestors. Duplicates are
    /// reported as this kind.
    OutOfOrder,
    /// A child's parent link does not point back at the node holding it.
    BrokenParentLink,
    /// The root has a parent link.
    RootHasParent,
    /// A child's priority exceeds its parent's.
    HeapOrder,
    /// The number of reachable nodes differs from the recorded length.
    SizeMismatch { expected: usize, reachable: usize },
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::OutOfOrder => write!(f, "elements are not in strictly ascending order"),
            Violation::BrokenParentLink => write!(f, "child does not link back to its parent"),
            Violation::RootHasParent => write!(f, "root has a parent link"),
            Violation::HeapOrder => write!(f, "child priority exceeds parent priority"),
            Violation::SizeMismatch { expected, reachable } => write!(
                f,
                "tree records {} elements but {} are reachable",
                expected, reachable,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Violation;

    #[test]
    fn test_display() {
        let violation = Violation::SizeMismatch {
            expected: 3,
            reachable: 2,
        };
        assert_eq!(
            violation.to_string(),
            "tree records 3 elements but 2 are reachable",
        );
        assert_eq!(
            Violation::HeapOrder.to_string(),
            "child priority exceeds parent priority",
        );
    }
}

//! Errors reported when a tree is found to break the ordering invariant.

/// A value sits on the wrong side of one of its ancestors. Values are rendered with their
/// `Display` form so the error doesn't need to be generic over the element type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// A value in some node's left subtree is not strictly less than that node's value.
    #[error("{found} is in the left subtree of {ancestor} but is not less than it")]
    LeftNotSmaller {
        /// The ancestor whose left subtree holds `found`.
        ancestor: String,
        /// The misplaced value.
        found: String,
    },
    /// A value in some node's right subtree is not strictly greater than that node's value.
    #[error("{found} is in the right subtree of {ancestor} but is not greater than it")]
    RightNotLarger {
        /// The ancestor whose right subtree holds `found`.
        ancestor: String,
        /// The misplaced value.
        found: String,
    },
}

/// The only error an [`OrderedTree`][crate::OrderedTree] raises. It is returned before any
/// mutation happens, so a rejected call leaves the tree untouched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A key sequence held an absent element.
    #[error("key sequence contains an absent element at index {index}")]
    AbsentElement {
        /// Position of the first absent element.
        index: usize,
    },
}

/// Checks every element of `keys` and unwraps them, failing on the first `None`.
pub(crate) fn require_keys<I>(keys: I) -> Result<Vec<i32>, InvalidArgument>
where
    I: IntoIterator<Item = Option<i32>>,
{
    keys.into_iter()
        .enumerate()
        .map(|(index, key)| key.ok_or(InvalidArgument::AbsentElement { index }))
        .collect()
}

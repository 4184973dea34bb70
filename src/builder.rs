//! Step by step configuration of a [`Tree`].

use log::warn;

use crate::error::TreeError;
use crate::tree::{default_element_size, Tree};

/// Configures a [`Tree`] before creating it.
///
/// The comparator is required. The element size is optional and defaults to the size of the
/// element type (or 1 for zero-sized types); it is informational only, the tree never allocates
/// based on it.
///
/// # Examples
///
/// ```
/// use cmp_bst::{Builder, Tree, TreeError};
///
/// let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
/// let mut tree: Tree<String, _> = Builder::new().comparator(by_len).element_size(24).build()?;
///
/// assert!(tree.insert("abc".to_owned()));
/// assert!(!tree.insert("xyz".to_owned()));
/// assert_eq!(tree.element_size(), 24);
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Builder<C> {
    element_size: Option<usize>,
    comparator: Option<C>,
}

impl<C> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Builder<C> {
    /// A builder with nothing configured.
    pub fn new() -> Self {
        Self {
            element_size: None,
            comparator: None,
        }
    }

    /// Sets the size in bytes of one element. Zero is rejected by [`build`][Self::build].
    pub fn element_size(mut self, element_size: usize) -> Self {
        self.element_size = Some(element_size);
        self
    }

    /// Sets the comparator that orders the tree.
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Creates an empty tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingComparator`] if no comparator was set and
    /// [`TreeError::ZeroElementSize`] if the element size was set to zero.
    pub fn build<T>(self) -> Result<Tree<T, C>, TreeError> {
        let Some(comparator) = self.comparator else {
            warn!("refusing to create a tree without a comparator");
            return Err(TreeError::MissingComparator);
        };
        let element_size = self
            .element_size
            .unwrap_or_else(|| default_element_size::<T>().get());
        Tree::create(element_size, comparator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;

    #[test]
    fn defaults_to_size_of() {
        let tree = Builder::new().comparator(NaturalOrder).build::<u16>().unwrap();
        assert_eq!(tree.element_size(), 2);
        assert!(tree.is_empty());
    }

    #[test]
    fn missing_comparator() {
        let err = Builder::<NaturalOrder>::new()
            .element_size(4)
            .build::<u32>()
            .unwrap_err();
        assert_eq!(err, TreeError::MissingComparator);
    }

    #[test]
    fn zero_element_size() {
        let err = Builder::new()
            .comparator(NaturalOrder)
            .element_size(0)
            .build::<u32>()
            .unwrap_err();
        assert_eq!(err, TreeError::ZeroElementSize);
    }
}

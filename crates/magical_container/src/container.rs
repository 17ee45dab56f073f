use crate::error::EmptyContainerError;

/// Insertion-ordered collection of `i32` values.
///
/// - Duplicates are kept.
/// - Removal is positional: it always drops the most recently added element.
/// - `Clone` is a deep copy; the clone shares no storage with the original.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MagicalContainer {
    elements: Vec<i32>,
}

impl MagicalContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add_element(&mut self, element: i32) {
        tracing::trace!(element, size = self.elements.len() + 1, "add element");
        self.elements.push(element);
    }

    /// Removes the most recently added element.
    ///
    /// `element` does not take part in the selection: whatever it is, the
    /// last-added element is the one removed.
    pub fn remove_element(&mut self, element: i32) -> Result<(), EmptyContainerError> {
        let removed = self.remove_last()?;
        tracing::trace!(requested = element, removed, "remove element");
        Ok(())
    }

    /// Removes and returns the most recently added element.
    pub fn remove_last(&mut self) -> Result<i32, EmptyContainerError> {
        match self.elements.pop() {
            Some(element) => Ok(element),
            None => {
                tracing::debug!("rejected removal from an empty container");
                Err(EmptyContainerError)
            }
        }
    }

    /// Elements in insertion order.
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.elements.iter()
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for element in iter {
            self.add_element(element);
        }
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::MagicalContainer;
    use crate::error::EmptyContainerError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn add_remove_and_size() {
        let mut container = MagicalContainer::new();
        assert_eq!(container.size(), 0);
        assert!(container.is_empty());

        for i in 0..10 {
            container.add_element(i);
        }
        assert_eq!(container.size(), 10);

        for i in 0..5 {
            assert_eq!(container.remove_element(i), Ok(()));
        }
        assert_eq!(container.size(), 5);
        assert_eq!(container.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn remove_ignores_requested_value() {
        let mut container: MagicalContainer = [7, 8, 9].into_iter().collect();

        // 7 is present, but the last-added element goes first.
        container.remove_element(7).unwrap();
        assert_eq!(container.as_slice(), &[7, 8]);

        // 20 was never added, the call still succeeds.
        container.remove_element(20).unwrap();
        assert_eq!(container.as_slice(), &[7]);
    }

    #[test]
    fn remove_last_returns_element() {
        let mut container: MagicalContainer = [3, -1, 4].into_iter().collect();
        assert_eq!(container.remove_last(), Ok(4));
        assert_eq!(container.remove_last(), Ok(-1));
        assert_eq!(container.remove_last(), Ok(3));
        assert_eq!(container.remove_last(), Err(EmptyContainerError));
    }

    #[test]
    fn remove_from_empty_fails_and_keeps_size() {
        let mut container = MagicalContainer::new();
        assert_eq!(container.remove_element(20), Err(EmptyContainerError));
        assert_eq!(container.size(), 0);

        container.add_element(1);
        container.remove_element(1).unwrap();
        assert_eq!(container.remove_element(1), Err(EmptyContainerError));
        assert_eq!(container.size(), 0);
    }

    #[test]
    fn clone_is_deep() {
        let mut container5 = MagicalContainer::new();
        for i in 0..5 {
            container5.add_element(i);
        }

        let mut container10 = container5.clone();
        assert_eq!(container10.size(), container5.size());

        container5.remove_element(0).unwrap();
        assert_ne!(container10.size(), container5.size());
        assert_eq!(container10.size(), 5);

        for i in 0..5 {
            container10.add_element(i);
        }
        assert_eq!(container10.size(), 10);
        assert_eq!(container5.size(), 4);

        container10.clone_from(&container5);
        assert_eq!(container10.size(), 4);
        assert_eq!(container10, container5);

        container10.add_element(99);
        assert_eq!(container5.size(), 4);
        assert_eq!(container5.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut container = MagicalContainer::new();
        container.add_element(1);
        container.extend([5, 5, -3]);
        assert_eq!(container.iter().copied().collect::<Vec<_>>(), vec![1, 5, 5, -3]);
        assert_eq!((&container).into_iter().count(), 4);
    }

    #[test]
    fn random_operations_match_vec() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut container = MagicalContainer::new();
        let mut vec = Vec::<i32>::new();

        for _ in 0..2000 {
            if rng.random_range(0..3) < 2 {
                let value = rng.random_range(-1000..=1000);
                container.add_element(value);
                vec.push(value);
            } else {
                let requested = rng.random_range(-1000..=1000);
                let expected = vec.pop().map(|_| ()).ok_or(EmptyContainerError);
                assert_eq!(container.remove_element(requested), expected);
            }
            assert_eq!(container.size(), vec.len());
            assert_eq!(container.as_slice(), vec.as_slice());
        }
    }
}

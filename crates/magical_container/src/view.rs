use std::cell::OnceCell;
use std::fmt;
use std::marker::PhantomData;

use crate::container::MagicalContainer;
use crate::cursor::{Cursor, Iter};
use crate::policy::{Ascending, OrderPolicy, Prime, SideCross, traversal_name};

/// Read-only traversal of a container in the order chosen by `P`.
///
/// The order is computed from the container's elements the first time a
/// cursor is requested and then reused. The view borrows the container, so
/// the elements cannot change while the view or any of its cursors is alive.
pub struct View<'a, P> {
    container: &'a MagicalContainer,
    order: OnceCell<Vec<usize>>,
    _policy: PhantomData<fn() -> P>,
}

pub type AscendingView<'a> = View<'a, Ascending>;
pub type SideCrossView<'a> = View<'a, SideCross>;
pub type PrimeView<'a> = View<'a, Prime>;

impl<'a, P: OrderPolicy> View<'a, P> {
    pub fn new(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            order: OnceCell::new(),
            _policy: PhantomData,
        }
    }

    pub fn container(&self) -> &'a MagicalContainer {
        self.container
    }

    /// Number of positions in the traversal.
    pub fn len(&self) -> usize {
        self.order().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor at the first element; past-the-end when the traversal is empty.
    pub fn start(&self) -> Cursor<'_, P> {
        self.cursor_at(0)
    }

    /// Cursor at the last element, which is still dereferenceable.
    ///
    /// When the traversal is empty this is the past-the-end cursor.
    pub fn last_position(&self) -> Cursor<'_, P> {
        self.cursor_at(self.len().saturating_sub(1))
    }

    /// Past-the-end cursor.
    pub fn end(&self) -> Cursor<'_, P> {
        self.cursor_at(self.len())
    }

    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(self.start())
    }

    fn cursor_at(&self, position: usize) -> Cursor<'_, P> {
        Cursor::new(self.container, self.order(), position)
    }

    fn order(&self) -> &[usize] {
        self.order.get_or_init(|| {
            let order = P::compute_order(self.container.as_slice());
            tracing::debug!(
                traversal = traversal_name(P::KIND),
                elements = self.container.size(),
                positions = order.len(),
                "computed traversal order"
            );
            order
        })
    }
}

impl<P> Clone for View<'_, P> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            order: self.order.clone(),
            _policy: PhantomData,
        }
    }
}

impl<P: OrderPolicy> fmt::Debug for View<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("traversal", &traversal_name(P::KIND))
            .field("container", self.container)
            .field("order", &self.order.get())
            .finish()
    }
}

impl<'v, P: OrderPolicy> IntoIterator for &'v View<'_, P> {
    type Item = i32;
    type IntoIter = Iter<'v, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

mod container;
mod cursor;
mod error;
mod policy;
mod prime;
mod view;

pub use container::MagicalContainer;
pub use cursor::{Cursor, Iter};
pub use error::EmptyContainerError;
pub use policy::{
    ALL_TRAVERSALS, Ascending, OrderPolicy, Prime, SideCross, TraversalKind, all_traversals,
    ascending_order, compute_order, prime_order, side_cross_order, traversal_name,
};
pub use prime::is_prime;
pub use view::{AscendingView, PrimeView, SideCrossView, View};

/// Routes `tracing` output to the test harness; filtered by `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

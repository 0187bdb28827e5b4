//! Scoped transaction boundary.

use std::sync::Arc;

use tradepost_core::DomainResult;

/// Unit-of-work boundary wrapping a whole service operation.
///
/// `run` executes `work` inside one transaction: every store write performed
/// by the closure commits when it returns `Ok`, and is rolled back when it
/// returns `Err`. The boundary is ambient with respect to the store gateways:
/// the closure calls them as usual, and the backend ties those calls to the
/// surrounding transaction.
///
/// Implementations must make read-then-write sequences against the same row
/// effectively atomic per transaction, so that two concurrent appends cannot
/// both pass a stock check against now-stale state.
pub trait TransactionBoundary: Send + Sync {
    fn run<T, F>(&self, work: F) -> DomainResult<T>
    where
        F: FnOnce() -> DomainResult<T>;
}

impl<X> TransactionBoundary for Arc<X>
where
    X: TransactionBoundary,
{
    fn run<T, F>(&self, work: F) -> DomainResult<T>
    where
        F: FnOnce() -> DomainResult<T>,
    {
        (**self).run(work)
    }
}

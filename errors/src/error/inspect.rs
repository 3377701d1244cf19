//! Generic error inspection across chains and foreign errors
//!
//! The free functions behave like the ecosystem's standard predicates on
//! any error value; a [`ChainError`] additionally forwards them along its
//! delegation order: wrapped foreign error, then predecessor, then a
//! sentinel synthesized from the node's own message.

use std::error::Error as StdError;

use super::types::{ChainError, Sentinel};

/// Reports whether `err`, or any error it delegates to, matches `target`.
///
/// Matching is by trait-object identity, or by value for two [`Sentinel`]s.
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    let mut current = err;
    loop {
        if matches(current, target) {
            return true;
        }
        if let Some(chain) = current.downcast_ref::<ChainError>() {
            return chain.delegate_is(target);
        }
        match current.source() {
            Some(next) => current = next,
            None => return false,
        }
    }
}

/// Returns the first error of concrete type `T` reachable from `err`.
pub fn downcast_ref<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut current = err;
    loop {
        if let Some(found) = current.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(chain) = current.downcast_ref::<ChainError>() {
            return chain.delegate_downcast();
        }
        current = current.source()?;
    }
}

/// One unwrapping step: the error `err` reports as its source, if any.
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

fn matches(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    if std::ptr::eq(
        err as *const (dyn StdError + 'static) as *const (),
        target as *const (dyn StdError + 'static) as *const (),
    ) {
        return true;
    }
    match (err.downcast_ref::<Sentinel>(), target.downcast_ref::<Sentinel>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl ChainError {
    pub(super) fn delegate_is(&self, target: &(dyn StdError + 'static)) -> bool {
        if let Some(foreign) = self.foreign.as_deref() {
            return is(foreign, target);
        }
        if let Some(prev) = self.prev.as_deref() {
            return is(prev, target);
        }
        // Terminal fallback: compare as if the message alone were the
        // error. A fresh value never shares identity with a caller's
        // sentinel; only value comparison can match here.
        is(&Sentinel::new(self.message.as_str()), target)
    }

    pub(super) fn delegate_downcast<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        if let Some(foreign) = self.foreign.as_deref() {
            return downcast_ref(foreign);
        }
        if let Some(prev) = self.prev.as_deref() {
            return downcast_ref(prev);
        }
        // A sentinel synthesized from the message would be dropped before
        // a borrow of it could escape, so extraction ends at a
        // pure-message root.
        None
    }
}

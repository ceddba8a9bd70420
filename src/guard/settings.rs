use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;

use crate::guard::types::Fallback;

/// Controls what a guard is allowed to absorb.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct GuardSettings {
    absorb_panics: bool,
}

impl GuardSettings {
    pub fn new() -> Self {
        GuardSettings {
            absorb_panics: true,
        }
    }

    /// When `false`, a panicking thunk unwinds through the guard instead of producing the default.
    ///
    /// `Err` and `None` results are absorbed either way.
    pub fn with_absorb_panics(mut self, absorb_panics: bool) -> Self {
        self.absorb_panics = absorb_panics;
        self
    }

    pub fn absorb_panics(&self) -> bool {
        self.absorb_panics
    }

    pub(crate) fn call<R>(&self, thunk: impl FnOnce() -> R) -> Result<R, Fallback> {
        if !self.absorb_panics {
            return Ok(thunk());
        }

        panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(|_| Fallback::Panicked)
    }

    pub(crate) async fn poll_to_end<F: Future>(&self, future: F) -> Result<F::Output, Fallback> {
        if !self.absorb_panics {
            return Ok(future.await);
        }

        AssertUnwindSafe(future)
            .catch_unwind()
            .await
            .map_err(|_| Fallback::Panicked)
    }
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self::new()
    }
}

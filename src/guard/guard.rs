use std::future::IntoFuture;

use crate::guard::async_guard::attempt_then_with;
use crate::guard::settings::GuardSettings;
use crate::guard::sync_guard::attempt_with;
use crate::guard::types::{resolve, Outcome, Settle};

/// A default value and settings that can be applied to many thunks.
///
/// The free functions ([`safe`](crate::safe), [`safe_then`](crate::safe_then), ...) behave like a
/// `Guard` built with default settings.
#[derive(Clone, Debug)]
pub struct Guard<T: Clone> {
    default: Option<T>,
    settings: GuardSettings,
}

impl<T: Clone> Guard<T> {
    pub fn new(default: impl Into<Option<T>>) -> Self {
        Guard {
            default: default.into(),
            settings: GuardSettings::default(),
        }
    }

    /// A guard whose default is `None`.
    pub fn absent() -> Self {
        Self::new(None)
    }

    pub fn with_settings(mut self, settings: GuardSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    pub fn attempt<F, R>(&self, thunk: F) -> Outcome<T>
    where
        F: FnOnce() -> R,
        R: Settle<Value = T>,
    {
        attempt_with(&self.settings, thunk)
    }

    pub fn run<F, R>(&self, thunk: F) -> Option<T>
    where
        F: FnOnce() -> R,
        R: Settle<Value = T>,
    {
        resolve(self.attempt(thunk), self.default.clone())
    }

    pub async fn attempt_then<F, Fut>(&self, thunk: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture,
        Fut::Output: Settle<Value = T>,
    {
        attempt_then_with(self.settings, thunk).await
    }

    pub async fn run_then<F, Fut>(&self, thunk: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture,
        Fut::Output: Settle<Value = T>,
    {
        let outcome = self.attempt_then(thunk).await;
        resolve(outcome, self.default.clone())
    }
}

impl<T: Clone> Default for Guard<T> {
    fn default() -> Self {
        Self::absent()
    }
}

use thiserror::Error;

/// The reason a guard substituted its default instead of returning a value.
///
/// No error payload is kept: whatever the thunk failed with is dropped.
#[derive(Error, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Fallback {
    #[error("absent")]
    Absent,
    #[error("failed")]
    Failed,
    #[error("panicked")]
    Panicked,
}

/// Either the value produced by a thunk, or why there wasn't one.
pub type Outcome<T> = Result<T, Fallback>;

/// A value a thunk can produce, which may turn out to be absent or a failure.
pub trait Settle {
    type Value;

    fn settle(self) -> Outcome<Self::Value>;
}

impl<T> Settle for Option<T> {
    type Value = T;

    fn settle(self) -> Outcome<T> {
        self.ok_or(Fallback::Absent)
    }
}

impl<T, E> Settle for Result<T, E> {
    type Value = T;

    fn settle(self) -> Outcome<T> {
        self.map_err(|_| Fallback::Failed)
    }
}

/// Unwraps an outcome into its value, or `default` if there is no value.
pub(crate) fn resolve<T>(outcome: Outcome<T>, default: Option<T>) -> Option<T> {
    match outcome {
        Ok(v) => Some(v),
        Err(reason) => {
            trace_fallback(reason);
            default
        }
    }
}

pub(crate) fn resolve_with<T>(outcome: Outcome<T>, default: impl FnOnce() -> T) -> T {
    match outcome {
        Ok(v) => v,
        Err(reason) => {
            trace_fallback(reason);
            default()
        }
    }
}

// only the kind is recorded, never the error or panic payload
fn trace_fallback(reason: Fallback) {
    tracing::trace!(%reason, "falling back to default");
}

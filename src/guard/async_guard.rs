use std::future::IntoFuture;

use crate::guard::settings::GuardSettings;
use crate::guard::types::{resolve, resolve_with, Outcome, Settle};

/// Invokes `thunk` and awaits the future it returns, turning panics, `Err` and `None` into a `Fallback`.
///
/// The thunk is not called until the returned future is first polled.
pub async fn attempt_then<F, Fut>(thunk: F) -> Outcome<<Fut::Output as Settle>::Value>
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
    Fut::Output: Settle,
{
    attempt_then_with(GuardSettings::default(), thunk).await
}

pub(crate) async fn attempt_then_with<F, Fut>(
    settings: GuardSettings,
    thunk: F,
) -> Outcome<<Fut::Output as Settle>::Value>
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
    Fut::Output: Settle,
{
    // a panic can happen while building the future or while polling it
    let future = settings.call(thunk)?.into_future();
    settings.poll_to_end(future).await?.settle()
}

/// Async version of [`safe`](crate::safe).
///
/// `thunk` may fail synchronously (panic when called) or asynchronously (its future panics, or
/// resolves to `Err` or `None`). In every one of those cases the returned future resolves to
/// `default`, so it always completes with a value.
///
/// ```
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let v = softguard::safe_then(|| async { Err::<i32, _>("x") }, 42).await;
/// assert_eq!(v, Some(42));
/// # });
/// ```
///
/// Panics can only be absorbed when the crate is built with `panic = "unwind"`. An absorbed panic
/// still goes through the process panic hook, which by default prints its message to stderr;
/// install a quiet hook with [`std::panic::set_hook`] if that output is unwanted.
///
/// Plain values can be lifted with [`std::future::ready`].
pub async fn safe_then<F, Fut>(
    thunk: F,
    default: impl Into<Option<<Fut::Output as Settle>::Value>>,
) -> Option<<Fut::Output as Settle>::Value>
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
    Fut::Output: Settle,
{
    resolve(attempt_then(thunk).await, default.into())
}

pub async fn safe_then_or<F, Fut>(
    thunk: F,
    default: <Fut::Output as Settle>::Value,
) -> <Fut::Output as Settle>::Value
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
    Fut::Output: Settle,
{
    resolve_with(attempt_then(thunk).await, || default)
}

/// `make_default` is only called if the thunk doesn't produce a value.
pub async fn safe_then_or_else<F, Fut, D>(thunk: F, make_default: D) -> <Fut::Output as Settle>::Value
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
    Fut::Output: Settle,
    D: FnOnce() -> <Fut::Output as Settle>::Value,
{
    resolve_with(attempt_then(thunk).await, make_default)
}

pub async fn safe_then_or_default<F, Fut>(thunk: F) -> <Fut::Output as Settle>::Value
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
    Fut::Output: Settle,
    <Fut::Output as Settle>::Value: Default,
{
    resolve_with(attempt_then(thunk).await, Default::default)
}

use crate::guard::settings::GuardSettings;
use crate::guard::types::{resolve, resolve_with, Outcome, Settle};

/// Invokes `thunk` once, turning panics, `Err` and `None` into a `Fallback`.
pub fn attempt<F, R>(thunk: F) -> Outcome<R::Value>
where
    F: FnOnce() -> R,
    R: Settle,
{
    attempt_with(&GuardSettings::default(), thunk)
}

pub(crate) fn attempt_with<F, R>(settings: &GuardSettings, thunk: F) -> Outcome<R::Value>
where
    F: FnOnce() -> R,
    R: Settle,
{
    settings.call(thunk)?.settle()
}

/// Invokes `thunk`, returning its value, or `default` if it panics, returns `Err`, or returns `None`.
///
/// `default` may itself be `None`. Handy for digging through nested optional data:
///
/// ```
/// struct Inner { b: Option<i32> }
/// struct Outer { a: Option<Inner> }
///
/// let doc = Outer { a: Some(Inner { b: None }) };
/// assert_eq!(softguard::safe(|| doc.a.as_ref()?.b, 0), Some(0));
/// ```
///
/// Panics can only be absorbed when the crate is built with `panic = "unwind"`. An absorbed panic
/// still goes through the process panic hook, which by default prints its message to stderr;
/// install a quiet hook with [`std::panic::set_hook`] if that output is unwanted.
pub fn safe<F, R>(thunk: F, default: impl Into<Option<R::Value>>) -> Option<R::Value>
where
    F: FnOnce() -> R,
    R: Settle,
{
    resolve(attempt(thunk), default.into())
}

/// Like [`safe`], with a default that is always present.
pub fn safe_or<F, R>(thunk: F, default: R::Value) -> R::Value
where
    F: FnOnce() -> R,
    R: Settle,
{
    resolve_with(attempt(thunk), || default)
}

/// Like [`safe_or`], but `make_default` is only called if the thunk doesn't produce a value.
pub fn safe_or_else<F, R, D>(thunk: F, make_default: D) -> R::Value
where
    F: FnOnce() -> R,
    R: Settle,
    D: FnOnce() -> R::Value,
{
    resolve_with(attempt(thunk), make_default)
}

pub fn safe_or_default<F, R>(thunk: F) -> R::Value
where
    F: FnOnce() -> R,
    R: Settle,
    R::Value: Default,
{
    resolve_with(attempt(thunk), Default::default)
}

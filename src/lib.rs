//! Evaluate expressions and futures that may fail or produce nothing, falling back to a default.

mod guard;
#[cfg(test)]
mod test_util;
mod util;

pub use guard::async_guard::{
    attempt_then, safe_then, safe_then_or, safe_then_or_default, safe_then_or_else,
};
pub use guard::guard::Guard;
pub use guard::settings::GuardSettings;
pub use guard::sync_guard::{attempt, safe, safe_or, safe_or_default, safe_or_else};
pub use guard::types::{Fallback, Outcome, Settle};

/// Evaluates an expression inside a guard, so `?` can be used on each optional step.
///
/// `safe!(expr)` returns an `Option`; `safe!(expr, default)` returns the value or `default`.
///
/// ```
/// use softguard::safe;
///
/// struct Leaf { c: i32 }
/// struct Branch { b: Option<Leaf> }
///
/// let doc = Branch { b: Some(Leaf { c: 1 }) };
/// let missing = Branch { b: None };
///
/// assert_eq!(safe!(doc.b.as_ref()?.c, 0), 1);
/// assert_eq!(safe!(missing.b.as_ref()?.c, 0), 0);
/// assert_eq!(safe!(missing.b.as_ref()?.c), None);
/// ```
#[macro_export]
macro_rules! safe {
    ($x:expr) => {
        $crate::safe(
            || -> ::core::option::Option<_> { ::core::option::Option::Some($x) },
            ::core::option::Option::None,
        )
    };
    ($x:expr, $default:expr) => {
        $crate::safe_or(
            || -> ::core::option::Option<_> { ::core::option::Option::Some($x) },
            $default,
        )
    };
}

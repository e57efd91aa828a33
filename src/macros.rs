// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Build a positional row from string-ish literals.
/// `None` stays missing, everything else becomes `Some(String)`.
///
/// ```
/// use ssa_dashboard::cells;
/// let c = cells!["SSA-1", None, ""];
/// assert_eq!(c, vec![Some("SSA-1".to_string()), None, Some(String::new())]);
/// ```
#[macro_export]
macro_rules! cells {
    (@one None) => { ::std::option::Option::<::std::string::String>::None };
    (@one $v:expr) => { ::std::option::Option::Some(::std::string::String::from($v)) };
    ($($v:tt),* $(,)?) => {
        ::std::vec![$( $crate::cells!(@one $v) ),*]
    };
}

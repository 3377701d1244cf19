//! Macros for error creation and handling

/// Wraps a source error with a message template.
///
/// With exactly one template argument the template is used verbatim, so
/// literal `{` and `%` need no escaping; with further arguments it goes
/// through `format!`.
#[doc(hidden)]
#[macro_export]
macro_rules! wrap {
    ($source:expr, $message:expr) => {
        $crate::ChainError::wrap($source, $message)
    };
    ($source:expr, $fmt:expr, $($arg:tt)+) => {
        $crate::ChainError::wrap($source, format!($fmt, $($arg)+))
    };
}

/// Macro for bailing out with a wrapped error.
#[doc(hidden)]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::wrap!($($arg)*))
    };
}

/// Macro for ensuring a condition holds.
#[doc(hidden)]
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}

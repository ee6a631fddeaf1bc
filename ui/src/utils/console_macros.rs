//! Browser console logging with a timestamp prefix.
//!
//! Each level macro formats its arguments and hands the text to
//! `console_at!`, which stamps it with `js_sys::Date::now()` before passing
//! it to the matching gloo_console function. Browser-only: `Date::now()`
//! panics off wasm32.

/// Prefix a console message with the browser timestamp in milliseconds
pub fn stamp(now_ms: f64, message: &str) -> String {
    format!("[{}] {}", now_ms, message)
}

#[doc(hidden)]
#[macro_export]
macro_rules! console_at {
    ($level:ident, $message:expr) => {
        gloo_console::$level!($crate::utils::console_macros::stamp(
            js_sys::Date::now(),
            &$message
        ))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::console_at!(info, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console_at!(warn, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console_at!(error, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::console_at!(debug, format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_prefixes_timestamp() {
        assert_eq!(
            stamp(1714560000000.0, "[TicketForm] Ticket submission failed: offline"),
            "[1714560000000] [TicketForm] Ticket submission failed: offline"
        );
        assert_eq!(stamp(12.5, "ready"), "[12.5] ready");
    }
}

//! Leveled logging macros.
//!
//! Usage follows [std::format!()]: a format template plus typed
//! arguments. The gate check happens at the call site on an atomic
//! load, so a suppressed line costs one comparison and no lock.

/// Gate check and dispatch shared by the level macros.
#[doc(hidden)]
#[macro_export]
macro_rules! do_log {
    ($lvl:expr, $($arg:tt)+) => ({
        let lvl = $lvl;
        if $crate::enabled(lvl) {
            $crate::_private_api_log(lvl, std::format_args!($($arg)+));
        }
    });
}
#[allow(unused_imports)]
pub(super) use do_log;

/// Emit one ERROR line.
///
/// # Examples:
///
/// ``` rust
/// use monolog::*;
/// log_error!("connect to {} failed: {}", "127.0.0.1:11211", "timeout");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => ($crate::do_log!($crate::Severity::Error, $($arg)+))
}
#[allow(unused_imports)]
pub(super) use log_error;

/// Emit one INFO line.
///
/// # Examples:
///
/// ``` rust
/// use monolog::*;
/// log_info!("wrote {} keys in {}ms", 1000, 42);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => ($crate::do_log!($crate::Severity::Info, $($arg)+))
}
#[allow(unused_imports)]
pub(super) use log_info;

/// Emit one DEBUG line.
///
/// # Examples:
///
/// ``` rust
/// use monolog::*;
/// log_debug!("key={} flags={:#x}", "user:1", 0x10u32);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => ($crate::do_log!($crate::Severity::Debug, $($arg)+))
}
#[allow(unused_imports)]
pub(super) use log_debug;

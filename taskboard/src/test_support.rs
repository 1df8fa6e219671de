//! Helpers shared by unit tests

/// Central European time with its daylight saving rule
pub const BERLIN: &str = "CET-1CEST,M3.5.0,M10.5.0/3";

/// Run `f` with the process timezone set to a POSIX TZ rule. Callers must be
/// `#[serial]` since the variable is process-wide.
pub fn with_tz<T>(rule: &str, f: impl FnOnce() -> T) -> T {
    let previous = std::env::var_os("TZ");
    std::env::set_var("TZ", rule);
    let out = f();
    match previous {
        Some(value) => std::env::set_var("TZ", value),
        None => std::env::remove_var("TZ"),
    }
    out
}

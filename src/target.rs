//! Default C++ standard library of a target.
//!
//! This file is also compiled into the build script, so it only uses `std`.
//! Values are the ones accepted by the `qt_compare_stdlib` cfg.

/// Operating systems whose system C++ standard library is libc++.
///
/// NetBSD and other GCC-based systems are not listed: they ship libstdc++.
pub const LIBCXX_TARGET_OSES: &[&str] = &[
    "macos", "ios", "tvos", "watchos", "visionos", "freebsd", "openbsd", "android",
];

/// Returns the cfg value for a `CARGO_CFG_TARGET_OS` / `CARGO_CFG_TARGET_ENV` pair.
pub fn default_stdlib_cfg(target_os: &str, target_env: &str) -> &'static str {
    if target_env == "msvc" {
        "msstl"
    } else if LIBCXX_TARGET_OSES.contains(&target_os) {
        "libcxx"
    } else {
        "libstdcxx"
    }
}

/// Returns the cfg value for a user-supplied library name, or `None` if the
/// name is not known.
pub fn parse_stdlib_cfg(name: &str) -> Option<&'static str> {
    match name {
        "libc++" | "libcxx" => Some("libcxx"),
        "libstdc++" | "libstdcxx" => Some("libstdcxx"),
        "msstl" | "msvc" => Some("msstl"),
        _ => None,
    }
}

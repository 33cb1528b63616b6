use std::env;

#[path = "src/target.rs"]
mod target;

const STDLIB_ENV_VAR_NAME: &str = "QT_COMPARE_CXX_STDLIB";

/// Picks the C++ standard library whose `std::partial_ordering` layout
/// the modern ordering types must match.
fn detect_stdlib() -> &'static str {
    if let Ok(value) = env::var(STDLIB_ENV_VAR_NAME) {
        let stdlib = target::parse_stdlib_cfg(&value).unwrap_or_else(|| {
            panic!(
                "{} has unsupported value \"{}\" (expected libc++, libstdc++ or msstl)",
                STDLIB_ENV_VAR_NAME, value
            )
        });
        println!(
            "cargo:warning=qt_compare: C++ stdlib ABI overridden to {}",
            stdlib
        );
        return stdlib;
    }

    let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    target::default_stdlib_cfg(&target_os, &target_env)
}

fn main() {
    println!("cargo:rerun-if-env-changed={}", STDLIB_ENV_VAR_NAME);
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/target.rs");
    println!("cargo:rustc-check-cfg=cfg(qt_compare_stdlib, values(\"libcxx\", \"libstdcxx\", \"msstl\"))");
    println!("cargo:rustc-cfg=qt_compare_stdlib=\"{}\"", detect_stdlib());
}

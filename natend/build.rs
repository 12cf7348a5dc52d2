#[path = "src/detect.rs"]
mod detect;

use detect::{
    Detected,
    Target,
};

const FORCE_VAR: &str = "NATEND_FORCE_RUNTIME";

fn main() {
    println!("cargo::rerun-if-changed=src/detect.rs");
    println!("cargo::rerun-if-env-changed={FORCE_VAR}");
    println!(r#"cargo::rustc-check-cfg=cfg(natend_order, values("little", "big", "middle"))"#);
    println!("cargo::rustc-check-cfg=cfg(natend_forced_runtime)");

    let forced = std::env::var_os("CARGO_FEATURE_FORCE_RUNTIME").is_some()
        || detect::is_forced(std::env::var(FORCE_VAR).ok().as_deref());

    if forced {
        println!("cargo::rustc-cfg=natend_forced_runtime");
        return;
    }

    let endian = std::env::var("CARGO_CFG_TARGET_ENDIAN").ok();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let target = Target {
        endian: endian.as_deref().filter(|endian| !endian.is_empty()),
        arch: &arch,
        os: &os,
    };

    match detect::detect(&target) {
        Some((Detected::Middle, source)) => {
            panic!("middle-endian (PDP) byte order is not supported (reported by {source:?})");
        }
        Some((order, _source)) => {
            println!("cargo::rustc-cfg=natend_order=\"{}\"", order.cfg_value());
        }
        None => {
            // no cfg: the library falls back to probing at runtime.
        }
    }
}

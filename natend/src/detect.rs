//! Build-time byte order detection.
//!
//! This module is shared with the build script (which `#[path]`-includes it),
//! so it must not depend on anything outside of `std`.

/// What the build target tells us about itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Target<'a> {
    /// `cfg(target_endian)`, if the compiler exposes it.
    pub endian: Option<&'a str>,
    /// `cfg(target_arch)`
    pub arch: &'a str,
    /// `cfg(target_os)`
    pub os: &'a str,
}

/// A byte order fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Detected {
    Little,
    Big,
    Middle,
}

impl Detected {
    /// Value of the `natend_order` cfg for this order.
    pub fn cfg_value(&self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
            Self::Middle => "middle",
        }
    }
}

/// Where a [`Detected`] order came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Compiler,
    Architecture,
    OperatingSystem,
}

/// Architectures that only exist in one byte order.
const ARCHITECTURES: &[(&str, Detected)] = &[
    ("x86", Detected::Little),
    ("x86_64", Detected::Little),
    ("s390x", Detected::Big),
];

/// Operating systems that only run in one byte order.
const OPERATING_SYSTEMS: &[(&str, Detected)] = &[("windows", Detected::Little)];

/// Determines the byte order of `target` without running anything on it.
///
/// The compiler's own `target_endian` wins, then the architecture table, then
/// the operating system table. Returns `None` if none of them knows, in which
/// case the order has to be probed at runtime.
pub fn detect(target: &Target) -> Option<(Detected, Source)> {
    if let Some(endian) = target.endian {
        match endian {
            "little" => return Some((Detected::Little, Source::Compiler)),
            "big" => return Some((Detected::Big, Source::Compiler)),
            "pdp" | "middle" => return Some((Detected::Middle, Source::Compiler)),
            // unknown value: don't trust it, fall through to the tables.
            _ => {}
        }
    }

    lookup(ARCHITECTURES, target.arch)
        .map(|order| (order, Source::Architecture))
        .or_else(|| lookup(OPERATING_SYSTEMS, target.os).map(|order| (order, Source::OperatingSystem)))
}

fn lookup(table: &[(&str, Detected)], name: &str) -> Option<Detected> {
    table
        .iter()
        .find_map(|(key, order)| (*key == name).then_some(*order))
}

/// Whether runtime detection was forced through the environment.
///
/// Empty and `0` count as unset.
pub fn is_forced(value: Option<&str>) -> bool {
    value.map_or(false, |value| !value.is_empty() && value != "0")
}

#[cfg(test)]
mod tests {
    use super::{
        detect,
        is_forced,
        Detected,
        Source,
        Target,
    };

    fn target(endian: Option<&'static str>, arch: &'static str, os: &'static str) -> Target<'static> {
        Target { endian, arch, os }
    }

    #[test]
    fn compiler_signal_wins() {
        assert_eq!(
            detect(&target(Some("big"), "x86_64", "windows")),
            Some((Detected::Big, Source::Compiler))
        );
        assert_eq!(
            detect(&target(Some("little"), "s390x", "linux")),
            Some((Detected::Little, Source::Compiler))
        );
    }

    #[test]
    fn architecture_before_os() {
        assert_eq!(
            detect(&target(None, "s390x", "windows")),
            Some((Detected::Big, Source::Architecture))
        );
        assert_eq!(
            detect(&target(None, "x86", "linux")),
            Some((Detected::Little, Source::Architecture))
        );
    }

    #[test]
    fn os_table() {
        assert_eq!(
            detect(&target(None, "aarch64", "windows")),
            Some((Detected::Little, Source::OperatingSystem))
        );
    }

    #[test]
    fn bi_endian_arch_is_undetermined() {
        assert_eq!(detect(&target(None, "mips", "linux")), None);
        assert_eq!(detect(&target(Some("weird"), "powerpc", "none")), None);
    }

    #[test]
    fn pdp_is_detected_as_middle() {
        assert_eq!(
            detect(&target(Some("pdp"), "pdp11", "none")),
            Some((Detected::Middle, Source::Compiler))
        );
    }

    #[test]
    fn cfg_values() {
        assert_eq!(Detected::Little.cfg_value(), "little");
        assert_eq!(Detected::Big.cfg_value(), "big");
        assert_eq!(Detected::Middle.cfg_value(), "middle");
    }

    #[test]
    fn forced_values() {
        assert!(!is_forced(None));
        assert!(!is_forced(Some("")));
        assert!(!is_forced(Some("0")));
        assert!(is_forced(Some("1")));
        assert!(is_forced(Some("yes")));
    }
}

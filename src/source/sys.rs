//! System entropy availability probe.
//!
//! The kernel's entropy estimate is advisory: modern kernels keep the
//! counter pinned once the pool initializes, and reading it consumes
//! nothing. The CLI uses it as a pre-flight check before generating
//! anything secret.

/// Path of the kernel entropy counter on Linux.
#[cfg(target_os = "linux")]
const ENTROPY_AVAIL: &str = "/proc/sys/kernel/random/entropy_avail";

/// Returns the kernel's current entropy estimate in bits, if the
/// platform exposes one.
#[cfg(target_os = "linux")]
pub fn available_entropy() -> Option<u64> {
    let raw = std::fs::read_to_string(ENTROPY_AVAIL).ok()?;
    parse_entropy(&raw)
}

/// Returns the kernel's current entropy estimate in bits, if the
/// platform exposes one.
#[cfg(not(target_os = "linux"))]
pub fn available_entropy() -> Option<u64> {
    None
}

#[cfg(target_os = "linux")]
fn parse_entropy(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

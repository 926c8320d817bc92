use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Whether `[DEBUG]` diagnostics should be written to stderr
pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

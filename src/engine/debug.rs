// src/engine/debug.rs

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

pub struct DebugFlags {
    pub debug_text: AtomicBool,
}

impl DebugFlags {
    pub const fn new() -> Self {
        Self {
            debug_text: AtomicBool::new(false),
        }
    }

    pub fn set_debug_text(&self, enabled: bool) {
        self.debug_text.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug_text_enabled(&self) -> bool {
        self.debug_text.load(Ordering::Relaxed)
    }
}

static DEBUG_FLAGS: DebugFlags = DebugFlags::new();

pub fn debug_flags() -> &'static DebugFlags {
    &DEBUG_FLAGS
}

/// Installs the fmt subscriber. Honors `RUST_LOG`, defaults to `info`.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::engine::debug::debug_flags().is_debug_text_enabled() {
            tracing::debug!("[{}:{}] {}", file!(), line!(), format!($($arg)*));
        }
    };
}

/// Toggle debug text
pub fn toggle_debug_text() {
    let current = DEBUG_FLAGS.is_debug_text_enabled();
    DEBUG_FLAGS.set_debug_text(!current);
    tracing::info!("Debug text: {}", if !current { "ON" } else { "OFF" });
}

pub fn set_debug_text(enabled: bool) {
    DEBUG_FLAGS.set_debug_text(enabled);
}

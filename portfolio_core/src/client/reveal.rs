//! Scroll-reveal library collaborator.
//!
//! The reveal library is opaque to this crate: it exposes `init(config)` and
//! `refresh()` and nothing else. Initialization is process-wide presentational
//! setup with a single logical initializer, so it is guarded: every mount
//! after the first becomes a no-op, while `refresh` stays callable any time.

use std::sync::Once;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealConfig {
    pub duration_ms: u64,
    pub easing: String,
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: "ease-in-out".to_string(),
            once: true,
        }
    }
}

pub trait RevealEffects: Send + Sync {
    fn init(&self, config: &RevealConfig);
    fn refresh(&self);
}

/// One-shot guard around a reveal library's `init`.
#[derive(Debug)]
pub struct RevealInit {
    once: Once,
}

impl Default for RevealInit {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealInit {
    pub const fn new() -> Self {
        Self { once: Once::new() }
    }

    /// Runs `init` on the first call only; later mounts are no-ops.
    pub fn init(&self, effects: &dyn RevealEffects, config: &RevealConfig) {
        self.once.call_once(|| {
            effects.init(config);
        });
    }

    pub fn is_initialized(&self) -> bool {
        self.once.is_completed()
    }
}

static GLOBAL_REVEAL_INIT: RevealInit = RevealInit::new();

pub fn init_reveal_once(effects: &dyn RevealEffects, config: &RevealConfig) {
    GLOBAL_REVEAL_INIT.init(effects, config);
}

/// Stand-in used when no reveal library is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReveal;

impl RevealEffects for NoopReveal {
    fn init(&self, _config: &RevealConfig) {}
    fn refresh(&self) {}
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Receives progress from a running sync.
///
/// Implementations decide where callbacks land (stderr, a UI channel);
/// the core stays free of any threading primitive. Marshaling onto a
/// particular execution context is the handler's concern.
pub trait ProgressHandler: Send + Sync {
    /// Informational update; fires zero or more times.
    fn on_update(&self, title: &str, detail: &str);

    /// Terminal outcome; fires exactly once per sync invocation.
    /// `message` is `None` on a fully successful run.
    fn on_finished(&self, message: Option<&str>, success: bool);
}

/// Cooperative cancellation flag, checked between sequential sync steps.
/// Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Coalesces rapid-fire updates (byte-level transfer progress) so that at
/// most one passes per interval. The first call always passes; a trailing
/// update inside the window is dropped, which is acceptable because the
/// terminal callback is independent of throttled updates.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(75);

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True when enough time has passed since the last emission. Records
    /// the emission timestamp when it returns true.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

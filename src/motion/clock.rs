//! Frame Clock System - Shared counters per FPS
//!
//! Paces card animation without each card owning a timer. All cards driven at
//! the same FPS share a single counter thread for efficiency and visual sync.
//!
//! # Pattern
//!
//! - Multiple cards advancing at 60 FPS share one clock
//! - Clock starts when first subscriber arrives, stops when last unsubscribes
//! - `frame_count` is monotonic; consumers diff it against their last read
//!
//! # Example
//!
//! ```ignore
//! use tiltcard::motion::{subscribe_to_frames, frame_count, frame_dt};
//!
//! let unsubscribe = subscribe_to_frames(60);
//!
//! let mut seen = frame_count(60);
//! loop {
//!     let now = frame_count(60);
//!     for _ in seen..now {
//!         // advance springs by frame_dt(60)
//!     }
//!     seen = now;
//!     # break;
//! }
//!
//! unsubscribe();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

// =============================================================================
// CLOCK REGISTRY
// =============================================================================

/// Per-FPS clock registry containing shared timer state.
struct ClockRegistry {
    /// Monotonic frame counter, bumped from the timer thread.
    frames: Arc<AtomicU64>,
    /// Background timer thread handle.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal the timer thread to stop.
    running: Arc<AtomicBool>,
    /// Number of active subscribers.
    subscribers: usize,
}

thread_local! {
    /// Map from FPS to clock registry.
    static FRAME_CLOCKS: RefCell<HashMap<u8, ClockRegistry>> = RefCell::new(HashMap::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to the frame clock at the given FPS.
///
/// Returns an unsubscribe function that must be called when done. Multiple
/// subscribers at the same FPS share one timer.
///
/// # Arguments
///
/// * `fps` - Frame rate. If 0, returns a no-op unsubscribe (clock disabled).
pub fn subscribe_to_frames(fps: u8) -> Box<dyn FnOnce()> {
    // Guard against invalid fps (0 would cause an infinite interval)
    if fps == 0 {
        return Box::new(|| {});
    }

    FRAME_CLOCKS.with(|clocks| {
        let mut clocks = clocks.borrow_mut();

        let registry = clocks.entry(fps).or_insert_with(|| ClockRegistry {
            frames: Arc::new(AtomicU64::new(0)),
            handle: None,
            running: Arc::new(AtomicBool::new(false)),
            subscribers: 0,
        });

        registry.subscribers += 1;

        // Start the timer on first subscriber
        if registry.subscribers == 1 {
            let ms = 1000u64 / fps as u64;
            let frames = registry.frames.clone();
            let running = registry.running.clone();
            running.store(true, Ordering::SeqCst);
            debug!("event=frame_clock_start fps={fps}");

            registry.handle = Some(thread::spawn(move || {
                while running.load(Ordering::SeqCst) {
                    thread::sleep(Duration::from_millis(ms));
                    if running.load(Ordering::SeqCst) {
                        frames.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }));
        }
    });

    // Return unsubscribe closure
    Box::new(move || {
        FRAME_CLOCKS.with(|clocks| {
            let mut clocks = clocks.borrow_mut();
            if let Some(registry) = clocks.get_mut(&fps) {
                registry.subscribers = registry.subscribers.saturating_sub(1);

                // Stop the timer once nobody is listening. The thread exits
                // on its next wake when it sees the flag; we never join here.
                if registry.subscribers == 0 {
                    registry.running.store(false, Ordering::SeqCst);
                    debug!("event=frame_clock_stop fps={fps}");
                }
            }
        });
    })
}

/// Monotonic frame count for the given FPS.
///
/// Returns 0 if no clock has ever run at this FPS. The count survives a
/// stop/restart cycle, so consumers can always diff against a prior read.
pub fn frame_count(fps: u8) -> u64 {
    FRAME_CLOCKS.with(|clocks| {
        let clocks = clocks.borrow();
        clocks
            .get(&fps)
            .map(|r| r.frames.load(Ordering::SeqCst))
            .unwrap_or(0)
    })
}

/// Seconds per frame at the given FPS. Zero FPS yields 0.0.
pub fn frame_dt(fps: u8) -> f32 {
    if fps == 0 { 0.0 } else { 1.0 / fps as f32 }
}

/// Check if a clock is currently running for the given FPS.
pub fn is_clock_running(fps: u8) -> bool {
    FRAME_CLOCKS.with(|clocks| {
        let clocks = clocks.borrow();
        clocks
            .get(&fps)
            .map(|r| r.running.load(Ordering::SeqCst) && r.subscribers > 0)
            .unwrap_or(false)
    })
}

/// Number of subscribers for a given FPS (0 if no registry).
pub fn subscriber_count(fps: u8) -> usize {
    FRAME_CLOCKS.with(|clocks| {
        let clocks = clocks.borrow();
        clocks.get(&fps).map(|r| r.subscribers).unwrap_or(0)
    })
}

/// Reset all frame clocks (for testing).
///
/// Stops all timers and clears all registries.
pub fn reset_frame_clocks() {
    FRAME_CLOCKS.with(|clocks| {
        let mut clocks = clocks.borrow_mut();

        for registry in clocks.values_mut() {
            registry.running.store(false, Ordering::SeqCst);
            registry.subscribers = 0;
        }

        clocks.clear();
    });
}

// =============================================================================
// TESTS
// =============================================================================

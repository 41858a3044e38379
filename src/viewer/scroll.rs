//! Scroll signal throttling for hosts.
//!
//! Scroll events can fire many times per frame. A new position is accepted
//! only once the throttle interval has elapsed since the last accepted one;
//! positions arriving inside the interval are dropped, not queued.

use crate::types::{ScrollPosition, DEFAULT_THROTTLE_MS};

/// Throttle state for one scrollable host element.
#[derive(Debug, Clone)]
pub struct ScrollThrottle {
    throttle_ms: f64,
    last_accepted_ms: Option<f64>,
    current: ScrollPosition,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

impl ScrollThrottle {
    pub fn new(throttle_ms: f64) -> Self {
        Self {
            throttle_ms,
            last_accepted_ms: None,
            current: ScrollPosition::default(),
        }
    }

    pub fn throttle_ms(&self) -> f64 {
        self.throttle_ms
    }

    /// Last accepted position; `{0, 0}` before any signal.
    pub fn current(&self) -> ScrollPosition {
        self.current
    }

    /// Offer a scroll signal observed at `now_ms`.
    ///
    /// Returns the new position when it was accepted and differs from the
    /// current one. A dropped signal, or an accepted one that did not move,
    /// returns `None` and needs no re-render.
    pub fn offer(&mut self, now_ms: f64, position: ScrollPosition) -> Option<ScrollPosition> {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last <= self.throttle_ms {
                log::trace!("dropping scroll signal {:.1}ms after last", now_ms - last);
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);

        if position == self.current {
            return None;
        }
        self.current = position;
        Some(position)
    }

    /// Adopt `position` immediately without opening a new throttle window.
    /// Used for host-initiated scrolls, which must not be dropped.
    pub fn sync(&mut self, position: ScrollPosition) -> bool {
        let changed = position != self.current;
        self.current = position;
        changed
    }

    /// Forget the throttle window and position, as if the host was re-attached.
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
        self.current = ScrollPosition::default();
    }
}

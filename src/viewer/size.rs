//! Element size tracking for hosts.

use crate::types::ContainerSize;

/// Last measured size of the host element's visible box.
///
/// Reports `{0, 0}` until the first measurement. Resize signals are not
/// throttled: every measurement is applied immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementSize {
    current: ContainerSize,
}

impl ElementSize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ContainerSize {
        self.current
    }

    /// Apply a measurement. `None` means the element is not attached and
    /// leaves the last size in place. Returns whether the size changed.
    pub fn measure(&mut self, measured: Option<ContainerSize>) -> bool {
        let Some(size) = measured else {
            return false;
        };
        if size == self.current {
            return false;
        }
        log::debug!("container resized to {}x{}", size.width, size.height);
        self.current = size;
        true
    }
}

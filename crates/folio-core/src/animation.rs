/// A running frame loop that can be halted.
pub trait LoopHandle {
    fn stop(&mut self);
}

/// Holds at most one running loop.
///
/// [`LoopSlot::replace`] halts the current loop before the new one is
/// started, so a re-mount never leaves two loops drawing into the same
/// surface. Dropping the slot halts whatever it holds.
pub struct LoopSlot<H: LoopHandle> {
    current: Option<H>,
}

impl<H: LoopHandle> Default for LoopSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: LoopHandle> LoopSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the held loop, then store the one returned by `start`.
    pub fn replace(&mut self, start: impl FnOnce() -> H) {
        self.stop();
        self.current = Some(start());
    }

    pub fn stop(&mut self) {
        if let Some(mut old) = self.current.take() {
            old.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: LoopHandle> Drop for LoopSlot<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

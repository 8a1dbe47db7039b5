use log::debug;

use super::PixelBuffer;

/// Repaint hook: receives the finished frame whenever a surface renders.
pub trait Presenter {
    fn present(&mut self, frame: &PixelBuffer);
}

impl<F: FnMut(&PixelBuffer)> Presenter for F {
    fn present(&mut self, frame: &PixelBuffer) {
        self(frame);
    }
}

/// Coalesces any number of writes into one deferred repaint.
///
/// `schedule` arms the pending flag at most once; `take` disarms it when the
/// host drains the tick. Nothing can cancel an armed repaint.
#[derive(Debug, Clone)]
pub struct RenderScheduler {
    auto_render: bool,
    pending: bool,
    repaints: u64,
}

impl RenderScheduler {
    pub fn new(auto_render: bool) -> Self {
        Self {
            auto_render,
            pending: false,
            repaints: 0,
        }
    }

    #[inline]
    pub fn auto_render(&self) -> bool {
        self.auto_render
    }

    pub fn set_auto_render(&mut self, enabled: bool) {
        self.auto_render = enabled;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of repaints fired so far
    #[inline]
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    /// Arm a repaint. Returns false when auto-render is off or one is already armed.
    pub fn schedule(&mut self) -> bool {
        if !self.auto_render || self.pending {
            return false;
        }
        self.pending = true;
        debug!("repaint scheduled");
        true
    }

    /// Fire the armed repaint, if any
    pub fn take(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.repaints += 1;
        true
    }

    /// Disarm without counting a repaint
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_coalesces() {
        let mut sched = RenderScheduler::default();
        assert!(sched.schedule());
        assert!(!sched.schedule());
        assert!(sched.take());
        assert!(!sched.take());
        assert_eq!(sched.repaints(), 1);
        assert!(sched.schedule());
    }

    #[test]
    fn test_disabled_never_arms() {
        let mut sched = RenderScheduler::new(false);
        assert!(!sched.schedule());
        assert!(!sched.is_pending());
        assert!(!sched.take());
    }

    #[test]
    fn test_cancel_skips_the_counter() {
        let mut sched = RenderScheduler::default();
        assert!(sched.schedule());
        sched.cancel();
        assert!(!sched.is_pending());
        assert!(!sched.take());
        assert_eq!(sched.repaints(), 0);
    }
}

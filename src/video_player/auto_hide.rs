// SPDX-License-Identifier: MPL-2.0
//! Idle timer hiding the controls overlay during playback.

use crate::domain::video::ControlsTimeout;
use std::time::{Duration, Instant};

/// Visibility of the controls overlay plus its hide countdown.
///
/// The countdown only runs while hiding is allowed (playing and not
/// dragging). Disallowing it shows the controls immediately.
#[derive(Debug, Clone)]
pub struct AutoHide {
    timeout: Duration,
    armed_at: Option<Instant>,
    visible: bool,
}

impl AutoHide {
    #[must_use]
    pub fn new(timeout: ControlsTimeout) -> Self {
        Self {
            timeout: timeout.as_duration(),
            armed_at: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Instant at which the controls will hide, if counting down.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.armed_at.map(|at| at + self.timeout)
    }

    /// Pointer activity: show the controls and restart the countdown.
    pub fn poke(&mut self, now: Instant, can_hide: bool) {
        self.visible = true;
        self.armed_at = can_hide.then_some(now);
    }

    /// Reconciles the countdown with the playback state.
    pub fn sync(&mut self, now: Instant, can_hide: bool) {
        if !can_hide {
            self.visible = true;
            self.armed_at = None;
        } else if self.visible && self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    /// Hides the controls once the countdown has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline() {
            if now >= deadline {
                self.visible = false;
                self.armed_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn starts_visible_and_idle() {
        let hide = AutoHide::new(ControlsTimeout::default());
        assert!(hide.is_visible());
        assert_eq!(hide.deadline(), None);
    }

    #[test]
    fn hides_after_timeout_while_playing() {
        let start = Instant::now();
        let mut hide = AutoHide::new(ControlsTimeout::new(3));
        hide.sync(start, true);

        hide.tick(start + secs(2));
        assert!(hide.is_visible());

        hide.tick(start + secs(3));
        assert!(!hide.is_visible());
    }

    #[test]
    fn poke_shows_and_rearms() {
        let start = Instant::now();
        let mut hide = AutoHide::new(ControlsTimeout::new(3));
        hide.sync(start, true);
        hide.tick(start + secs(4));
        assert!(!hide.is_visible());

        hide.poke(start + secs(5), true);
        assert!(hide.is_visible());
        hide.tick(start + secs(7));
        assert!(hide.is_visible());
        hide.tick(start + secs(8));
        assert!(!hide.is_visible());
    }

    #[test]
    fn never_hides_while_paused() {
        let start = Instant::now();
        let mut hide = AutoHide::new(ControlsTimeout::new(1));
        hide.sync(start, false);
        hide.tick(start + secs(60));
        assert!(hide.is_visible());
    }

    #[test]
    fn pausing_reveals_hidden_controls() {
        let start = Instant::now();
        let mut hide = AutoHide::new(ControlsTimeout::new(1));
        hide.sync(start, true);
        hide.tick(start + secs(2));
        assert!(!hide.is_visible());

        hide.sync(start + secs(3), false);
        assert!(hide.is_visible());
    }
}

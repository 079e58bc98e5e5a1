//! Copy feedback - the transient "copied" flag behind the copy buttons
//!
//! Every copy starts a new generation. The clear timer carries the token it
//! was started with and only clears the flag if no newer copy has happened.

use crate::error::GalleryError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyFeedback {
    generation: u64,
    copied: bool,
    notice: Option<String>,
}

impl CopyFeedback {
    /// Raise the flag; returns the token the clear timer must present.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.notice = None;
        self.generation
    }

    /// Timer callback. Returns whether the flag was cleared.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    /// Clipboard write failed: drop the flag and show why.
    pub fn fail(&mut self, error: &GalleryError) {
        self.generation = self.generation.wrapping_add(1);
        self.copied = false;
        self.notice = Some(error.to_string());
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_clears_its_own_generation() {
        let mut fb = CopyFeedback::default();
        let token = fb.begin();
        assert!(fb.is_copied());
        assert!(fb.expire(token));
        assert!(!fb.is_copied());
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut fb = CopyFeedback::default();
        let first = fb.begin();
        let second = fb.begin();
        assert!(!fb.expire(first));
        assert!(fb.is_copied());
        assert!(fb.expire(second));
    }

    #[test]
    fn failure_never_leaves_flag_stuck() {
        let mut fb = CopyFeedback::default();
        let token = fb.begin();
        fb.fail(&GalleryError::Clipboard("denied".into()));
        assert!(!fb.is_copied());
        assert_eq!(fb.notice(), Some("clipboard write failed: denied"));
        assert!(!fb.expire(token));
        fb.dismiss();
        assert_eq!(fb.notice(), None);
    }

    #[test]
    fn new_copy_clears_previous_notice() {
        let mut fb = CopyFeedback::default();
        fb.fail(&GalleryError::Clipboard("denied".into()));
        fb.begin();
        assert!(fb.notice().is_none());
    }
}

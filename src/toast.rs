//! Transient status notifications
//!
//! At most one toast is active at a time. Posting returns a sequence
//! number; the event loop schedules one delayed revert per post, and a
//! fired revert only applies when its sequence still matches, so a stale
//! timer can never clear a newer message.

use std::time::Duration;

/// How long a toast stays up before reverting to the idle message
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Severity of a toast, used only for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct Toasts {
    seq: u64,
    active: Option<(String, ToastLevel)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a message, preempting any pending one. Returns the
    /// sequence number the revert timer must carry.
    pub fn post(&mut self, message: impl Into<String>, level: ToastLevel) -> u64 {
        self.seq += 1;
        self.active = Some((message.into(), level));
        self.seq
    }

    /// Revert the toast posted with sequence `seq`. A no-op (returning
    /// false) when a newer toast has been posted since.
    pub fn expire(&mut self, seq: u64) -> bool {
        if seq == self.seq && self.active.is_some() {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Currently displayed message, if any
    pub fn active(&self) -> Option<(&str, ToastLevel)> {
        self.active.as_ref().map(|(m, l)| (m.as_str(), *l))
    }

    /// Sequence number of the most recent post
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_expire() {
        let mut toasts = Toasts::new();
        let seq = toasts.post("5 rows in 12ms", ToastLevel::Success);
        assert_eq!(toasts.active().map(|(m, _)| m), Some("5 rows in 12ms"));
        assert!(toasts.expire(seq));
        assert!(toasts.active().is_none());
    }

    #[test]
    fn test_stale_revert_is_noop() {
        let mut toasts = Toasts::new();
        let first = toasts.post("first", ToastLevel::Info);
        let _second = toasts.post("second", ToastLevel::Info);

        // The first toast's timer fires after the second was posted.
        assert!(!toasts.expire(first));
        assert_eq!(toasts.active().map(|(m, _)| m), Some("second"));
    }

    #[test]
    fn test_expire_after_expire_is_noop() {
        let mut toasts = Toasts::new();
        let seq = toasts.post("msg", ToastLevel::Error);
        assert!(toasts.expire(seq));
        assert!(!toasts.expire(seq));
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut toasts = Toasts::new();
        let a = toasts.post("a", ToastLevel::Info);
        let b = toasts.post("b", ToastLevel::Info);
        let c = toasts.post("c", ToastLevel::Info);
        assert!(a < b && b < c);
        assert_eq!(toasts.seq(), c);
    }
}

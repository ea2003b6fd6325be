//! Transient status messages.
//!
//! Every change to a [`Flash`] bumps its generation. An expiry timer started for
//! one message only clears that message, never a later one.

use std::time::Duration;

use crate::timer::sleep;

#[derive(Clone, Debug, PartialEq)]
pub struct Flash<T> {
    message: Option<T>,
    generation: u64,
}

impl<T> Default for Flash<T> {
    fn default() -> Self {
        Self {
            message: None,
            generation: 0,
        }
    }
}

impl<T> Flash<T> {
    pub fn message(&self) -> Option<&T> {
        self.message.as_ref()
    }

    /// Show `message`, returning the generation to pass to [`expire`](Self::expire).
    pub fn show(&mut self, message: T) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.generation
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.message = None;
    }

    /// Clear the message shown as `generation`. Returns `false` if it was already replaced.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.message = None;
        true
    }
}

/// Wait `duration`, then expire `generation` through `expire`.
pub async fn expire_after<F>(duration: Duration, generation: u64, expire: F) -> bool
where
    F: FnOnce(u64) -> bool,
{
    sleep(duration).await;
    expire(generation)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Instant;

    #[tokio::test]
    async fn test_message_clears_after_duration() {
        let flash = RefCell::new(Flash::default());
        let generation = flash.borrow_mut().show("saved");

        let start = Instant::now();
        let cleared = expire_after(Duration::from_millis(30), generation, |g| {
            flash.borrow_mut().expire(g)
        })
        .await;

        assert!(cleared);
        assert!(start.elapsed() >= Duration::from_millis(30));
        assert_eq!(flash.borrow().message(), None);
    }

    #[tokio::test]
    async fn test_stale_timer_keeps_newer_failure() {
        let flash = RefCell::new(Flash::default());
        let saved = flash.borrow_mut().show("saved");
        flash.borrow_mut().clear();
        flash.borrow_mut().show("failed");

        let cleared = expire_after(Duration::from_millis(10), saved, |g| {
            flash.borrow_mut().expire(g)
        })
        .await;

        assert!(!cleared);
        assert_eq!(flash.borrow().message(), Some(&"failed"));
    }

    #[test]
    fn test_clear_invalidates_pending_expiry() {
        let mut flash = Flash::default();
        let generation = flash.show(1);
        flash.clear();
        assert!(!flash.expire(generation));
        assert_eq!(flash.message(), None);
    }
}

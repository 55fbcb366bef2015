//! # Notification Subsystem
//!
//! An append-only stack of ephemeral toasts, each an independent little
//! state machine.
//!
//! ## Toast Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Toast Lifecycle                                   │
//! │                                                                         │
//! │  push()                                                                 │
//! │    │                                                                    │
//! │    ▼        400 ms          at 2500 ms        400 ms                    │
//! │  ┌────────┐      ┌────────┐      ┌────────┐      (removed              │
//! │  │Entering│─────►│Visible │─────►│Exiting │─────► from the             │
//! │  └────────┘      └────────┘      └────────┘      stack)                │
//! │                                                                         │
//! │  • Phases advance from the injected Clock, not wall-clock timers,      │
//! │    so tests drive the machine with a counter.                           │
//! │  • Every push creates a new toast - no queuing, no suppression.        │
//! │  • Toasts count down independently; overlapping stacks are normal.     │
//! │  • Once scheduled, an exit is not cancellable.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Entrance animation length.
pub const TOAST_ENTER: Duration = Duration::from_millis(400);

/// How long a toast stays up, measured from its push.
pub const TOAST_DISPLAY: Duration = Duration::from_millis(2500);

/// Exit animation length; removal happens when it completes.
pub const TOAST_EXIT: Duration = Duration::from_millis(400);

// =============================================================================
// Clock
// =============================================================================

/// Time source for the toast machine.
///
/// `now` is elapsed time since an arbitrary epoch; only differences matter.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock [`Clock`] measuring from its creation.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Hand-driven [`Clock`] for tests: time moves only on [`ManualClock::advance`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock::default()
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.millis
            .fetch_add(by.as_millis() as u64, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::Relaxed))
    }
}

// =============================================================================
// Toasts
// =============================================================================

/// Visible phases of a toast. Removal is not a phase - a finished toast
/// leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Entrance animation running.
    Entering,
    /// Fully visible.
    Visible,
    /// Exit animation running.
    Exiting,
}

/// One toast on the stack.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Monotonically increasing id, unique within the stack.
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Current phase, recomputed on every tick.
    pub phase: ToastPhase,
    pushed_at: Duration,
}

/// The toast stack. Newest toasts append at the end.
#[derive(Debug)]
pub struct ToastStack<C: Clock> {
    clock: C,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl<C: Clock> ToastStack<C> {
    pub fn new(clock: C) -> Self {
        ToastStack {
            clock,
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a new toast. Every call creates one, regardless of how many
    /// are already visible.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            message: message.into(),
            phase: ToastPhase::Entering,
            pushed_at: self.clock.now(),
        });

        id
    }

    /// Advances every toast's phase from the clock and drops finished ones.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        self.toasts.retain_mut(|toast| {
            let elapsed = now.saturating_sub(toast.pushed_at);

            if elapsed >= TOAST_DISPLAY + TOAST_EXIT {
                return false; // exit animation completed
            }

            toast.phase = if elapsed >= TOAST_DISPLAY {
                ToastPhase::Exiting
            } else if elapsed >= TOAST_ENTER {
                ToastPhase::Visible
            } else {
                ToastPhase::Entering
            };
            true
        });
    }

    /// Current stack, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Builds the markup for the toast container region.
pub fn stack_markup<C: Clock>(stack: &ToastStack<C>) -> String {
    stack
        .toasts()
        .iter()
        .map(|toast| {
            let class = match toast.phase {
                ToastPhase::Entering => "toast entering",
                ToastPhase::Visible => "toast",
                ToastPhase::Exiting => "toast exiting",
            };
            format!(
                "<div id=\"cartNotification-{}\" class=\"{}\">{}</div>",
                toast.id, class, toast.message
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> (ManualClock, ToastStack<ManualClock>) {
        let clock = ManualClock::new();
        let stack = ToastStack::new(clock.clone());
        (clock, stack)
    }

    #[test]
    fn test_single_toast_lifecycle() {
        let (clock, mut stack) = stack();

        stack.push("hola");
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Entering);

        clock.advance(Duration::from_millis(400));
        stack.tick();
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Visible);

        clock.advance(Duration::from_millis(2100)); // t = 2500
        stack.tick();
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Exiting);

        clock.advance(Duration::from_millis(400)); // t = 2900
        stack.tick();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_overlapping_toasts_count_down_independently() {
        let (clock, mut stack) = stack();

        stack.push("uno");
        clock.advance(Duration::from_millis(2000));
        stack.push("dos");
        stack.tick();

        assert_eq!(stack.toasts().len(), 2);
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Visible);
        assert_eq!(stack.toasts()[1].phase, ToastPhase::Entering);

        // t = 2600: first exiting, second visible
        clock.advance(Duration::from_millis(600));
        stack.tick();
        assert_eq!(stack.toasts()[0].phase, ToastPhase::Exiting);
        assert_eq!(stack.toasts()[1].phase, ToastPhase::Visible);

        // t = 2900: first removed, second still up
        clock.advance(Duration::from_millis(300));
        stack.tick();
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].message, "dos");
    }

    #[test]
    fn test_every_push_creates_a_toast() {
        let (_clock, mut stack) = stack();

        for _ in 0..5 {
            stack.push("✓ Producto agregado al carrito");
        }
        assert_eq!(stack.toasts().len(), 5);

        // Ids are distinct even though messages repeat
        let mut ids: Vec<_> = stack.toasts().iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_stack_markup_reflects_phases() {
        let (clock, mut stack) = stack();
        stack.push("uno");
        clock.advance(Duration::from_millis(500));
        stack.push("dos");
        stack.tick();

        let markup = stack_markup(&stack);
        assert!(markup.contains("class=\"toast\">uno"));
        assert!(markup.contains("class=\"toast entering\">dos"));
    }
}

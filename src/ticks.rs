//! Millisecond tick counter for report sequence numbers.
//!
//! Reports carry a sequence number sourced from a wall-clock tick count so
//! callers can detect state changes between polls. The counter is monotonic
//! non-decreasing; it is not required to be unique per call.

use std::sync::LazyLock;
use std::time::Instant;

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Milliseconds elapsed since the counter was first touched, truncated to
/// 32 bits. Wraps after ~49.7 days, same as GetTickCount.
pub fn tick_count() -> u32 {
    EPOCH.elapsed().as_millis() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_count_non_decreasing() {
        let a = tick_count();
        let b = tick_count();
        let c = tick_count();
        assert!(a <= b);
        assert!(b <= c);
    }

    #[test]
    fn test_tick_count_advances() {
        let before = tick_count();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let after = tick_count();
        assert!(after > before);
    }
}

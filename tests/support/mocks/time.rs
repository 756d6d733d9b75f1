// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use editorial_core::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 呼び出しごとに 1 秒進む決定論的な時計
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

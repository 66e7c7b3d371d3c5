//! Payment-method time-window rule.
//!
//! Bank transfers only settle during local banking hours, so the `BANK`
//! method is usable Monday through Friday, strictly after 06:00 and no
//! later than 14:30 in the operating timezone (UTC+9). `LINEPay` settles
//! instantly and is usable at any time. Every other method is unusable.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

/// Method usable around the clock.
pub const ALWAYS_ALLOWED_METHOD: &str = "LINEPay";

/// Method restricted to the banking-hours window.
pub const BANK_METHOD: &str = "BANK";

const OPERATING_TZ_OFFSET_SECS: i32 = 9 * 3600;

// Minutes of day; the open bound is exclusive, the close bound inclusive.
const WINDOW_OPEN_MINUTES: u32 = 6 * 60;
const WINDOW_CLOSE_MINUTES: u32 = 14 * 60 + 30;

/// The fixed UTC+9 operating timezone all window checks are evaluated in.
#[must_use]
pub fn operating_timezone() -> FixedOffset {
    FixedOffset::east_opt(OPERATING_TZ_OFFSET_SECS).expect("static UTC+9 offset")
}

/// Current wall-clock time in the operating timezone.
#[must_use]
pub fn now_in_operating_tz() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&operating_timezone())
}

/// Whether a payment method identifier is usable at `now`.
#[must_use]
pub fn method_usable(identifier: &str, now: DateTime<FixedOffset>) -> bool {
    match identifier {
        ALWAYS_ALLOWED_METHOD => true,
        BANK_METHOD => bank_window_open(now),
        _ => false,
    }
}

/// Whether the bank-transfer window is open at `now`.
#[must_use]
pub fn bank_window_open(now: DateTime<FixedOffset>) -> bool {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }

    let minutes = now.hour() * 60 + now.minute();
    minutes > WINDOW_OPEN_MINUTES && minutes <= WINDOW_CLOSE_MINUTES
}

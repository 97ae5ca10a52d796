use log::debug;

use crate::error::{Error, Result};

/// Firmware throttling bits in the order they are reported.
///
/// Low bits describe the current state, bits 16-19 latch once the condition
/// has happened since boot.
pub const THROTTLE_FLAGS: &[(u32, &str)] = &[
    (0x1, "Under-voltage detected"),
    (0x2, "Arm frequency capped"),
    (0x4, "Currently throttled"),
    (0x8, "Soft temperature limit active"),
    (0x10000, "Under-voltage has occurred"),
    (0x20000, "Arm frequency capping has occurred"),
    (0x40000, "Throttling has occurred"),
    (0x80000, "Soft temperature limit has occurred"),
];

const KEY: &str = "throttled";

/// Decodes a `throttled=<int>` line. The value may be decimal or `0x` hex.
pub fn parse_throttled(line: &str) -> Result<u32> {
    let line = line.trim();
    let unparseable = |reason: &str| Error::UnparseableOutput {
        output: line.to_string(),
        reason: reason.to_string(),
    };

    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| unparseable("expected 'throttled=<value>'"))?;
    if key.trim() != KEY {
        return Err(unparseable("expected key 'throttled'"));
    }

    let value = value.trim();
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"));
    if hex.unwrap_or(value).starts_with('+') {
        return Err(unparseable("unexpected sign"));
    }
    let parsed = match hex {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    let throttled = parsed.map_err(|e| unparseable(&e.to_string()))?;

    debug!("throttled bitmask {:#x}", throttled);
    Ok(throttled)
}

/// The table entries whose bit is set in `throttled`, in table order.
pub fn explain(throttled: u32) -> impl Iterator<Item = (u32, &'static str)> {
    THROTTLE_FLAGS
        .iter()
        .copied()
        .filter(move |(flag, _)| throttled & flag != 0)
}

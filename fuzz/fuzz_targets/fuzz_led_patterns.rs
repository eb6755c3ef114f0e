//! Fuzz target: `LedPatternEngine`
//!
//! Drives arbitrary status-change / time-advance sequences and verifies:
//! - No panics under any byte sequence
//! - Monotonic time never makes the engine inconsistent
//! - The OK pattern is always solid on after an update
//! - A genuine status change always re-asserts level high on the next
//!   update
//!
//! cargo fuzz run fuzz_led_patterns

#![no_main]

use libfuzzer_sys::fuzz_target;

use fridgeprobe::config::MonitorConfig;
use fridgeprobe::drivers::led_patterns::LedPatternEngine;
use fridgeprobe::monitor::status::Status;

fn status_from(byte: u8) -> Status {
    match byte % 4 {
        0 => Status::Ok,
        1 => Status::TooWarm,
        2 => Status::DoorOpen,
        _ => Status::Error,
    }
}

fuzz_target!(|data: &[u8]| {
    let config = MonitorConfig::default();
    let mut engine = LedPatternEngine::new(&config);
    let mut now = 0u64;

    // Interpret bytes as (op, arg) pairs.
    for pair in data.chunks(2) {
        let op = pair[0];
        let arg = pair.get(1).copied().unwrap_or(0);

        if op % 2 == 0 {
            let next = status_from(arg);
            let changed = next != engine.status();
            engine.set_status(next);
            if changed {
                now += 1;
                assert!(
                    engine.update(now),
                    "first update after a change must assert on"
                );
            }
        } else {
            now += u64::from(arg) * 10;
            let level = engine.update(now);
            assert_eq!(level, engine.level());
            if engine.status() == Status::Ok {
                assert!(level, "OK pattern is solid on");
            }
        }
    }
});

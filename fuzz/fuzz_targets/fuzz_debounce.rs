//! Fuzz target: `Debouncer`
//!
//! Feeds arbitrary raw-level / time-delta sequences and verifies:
//! - No panics under any byte sequence
//! - The confirmed state always matches a reference model computed over
//!   the samples the rate limiter actually accepts
//!
//! cargo fuzz run fuzz_debounce

#![no_main]

use libfuzzer_sys::fuzz_target;

use fridgeprobe::config::MonitorConfig;
use fridgeprobe::monitor::debounce::Debouncer;

fn model_debounce(samples: &[bool], k: u8) -> bool {
    let mut confirmed = false;
    let mut run = 0u8;
    for &s in samples {
        if s == confirmed {
            run = 0;
        } else {
            run += 1;
            if run >= k {
                confirmed = s;
                run = 0;
            }
        }
    }
    confirmed
}

fuzz_target!(|data: &[u8]| {
    let config = MonitorConfig::default();
    let mut debounce = Debouncer::new(&config);

    let mut accepted = Vec::new();
    let mut last_accepted: Option<u64> = None;
    let mut now = 0u64;

    for &byte in data {
        let raw_open = byte & 1 != 0;
        // Upper bits form the time delta; keep calls strictly forward.
        now += u64::from(byte >> 1) + 1;
        debounce.update(raw_open, now);

        let take = match last_accepted {
            None => true,
            Some(t) => now - t >= u64::from(config.debounce_interval_ms),
        };
        if take {
            last_accepted = Some(now);
            accepted.push(raw_open);
        }
    }

    assert_eq!(
        debounce.confirmed_open(),
        model_debounce(&accepted, config.debounce_samples)
    );
});

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr + Ord>(name: &str, default: T, min: T, max: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion with a flamegraph profiler attached; run with `--profile-time <secs>` to sample.
///
/// `PROFILE_FREQ`, `BENCH_SAMPLE_SIZE` and `BENCH_MEASUREMENT_SECS` override the defaults.
pub fn criterion() -> Criterion {
    let frequency = env_or("PROFILE_FREQ", 100_i32, 1, 1000);
    let sample_size = env_or("BENCH_SAMPLE_SIZE", 50_usize, 10, 200);
    let measurement_secs = env_or("BENCH_MEASUREMENT_SECS", 4_u64, 1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}

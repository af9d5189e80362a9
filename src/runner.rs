use crate::config::Config;
use crate::fib::{self, FibError};
use crate::timer;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::hint::black_box;
use std::time::Duration;

fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub index: u32,
    pub result: u64,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub n: u64,
    pub result: u64,
    pub started_at: DateTime<Utc>,
    /// Number of timed runs. Only the sampled ones are kept in `runs`.
    pub count: u32,
    #[serde(rename = "min_secs", serialize_with = "as_secs")]
    pub min: Duration,
    #[serde(rename = "mean_secs", serialize_with = "as_secs")]
    pub mean: Duration,
    #[serde(rename = "max_secs", serialize_with = "as_secs")]
    pub max: Duration,
    pub runs: Vec<Sample>,
}

/// Index 0, every power of two, and the final run get their own report line.
pub fn is_sampled(index: u32, last: u32) -> bool {
    index == 0 || index.is_power_of_two() || index == last
}

pub fn run(config: &Config) -> Result<Summary, FibError> {
    let n = fib::validate(config.n)?;
    if config.runs == 0 {
        return Err(FibError::NoRuns);
    }

    let started_at = Utc::now();
    let last = config.runs - 1;
    let mut runs = Vec::new();
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut total = Duration::ZERO;
    let mut result = 0;

    for index in 0..config.runs {
        let timed = timer::measure(|| fib::fib(black_box(n)));
        log::debug!("run {}: fib({}) = {} in {:?}", index, n, timed.value, timed.elapsed);

        if config.verify {
            let iterative = fib::fib_iter(n);
            if iterative != timed.value {
                return Err(FibError::Mismatch {
                    n,
                    recursive: timed.value,
                    iterative,
                });
            }
        }

        result = timed.value;
        min = min.min(timed.elapsed);
        max = max.max(timed.elapsed);
        total = total.saturating_add(timed.elapsed);

        if is_sampled(index, last) {
            runs.push(Sample {
                index,
                result: timed.value,
                elapsed: timed.elapsed,
            });
        }
    }

    Ok(Summary {
        n,
        result,
        started_at,
        count: config.runs,
        min,
        mean: total / config.runs,
        max,
        runs,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(n: i64, runs: u32) -> Config {
        Config {
            n,
            runs,
            ..Config::default()
        }
    }

    #[test]
    fn single_run() {
        let summary = run(&config(20, 1)).unwrap();
        assert_eq!(summary.n, 20);
        assert_eq!(summary.result, 6765);
        assert_eq!(summary.runs.len(), 1);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn repeated_runs_agree() {
        let summary = run(&Config {
            verify: true,
            ..config(15, 5)
        })
        .unwrap();
        assert_eq!(summary.count, 5);
        let indices: Vec<u32> = summary.runs.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 4]);
        assert!(summary.runs.iter().all(|s| s.result == 610));
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }

    #[test]
    fn many_runs_keep_only_sampled_lines() {
        let summary = run(&config(0, 100_000)).unwrap();
        assert_eq!(summary.count, 100_000);
        assert_eq!(summary.result, 0);
        // 0, 2^0 ..= 2^16, and the last index 99_999
        assert_eq!(summary.runs.len(), 19);
        assert_eq!(summary.runs.last().map(|s| s.index), Some(99_999));
    }

    #[test]
    fn rejects_zero_runs() {
        assert_eq!(run(&config(10, 0)), Err(FibError::NoRuns));
    }

    #[test]
    fn rejects_negative_n() {
        assert_eq!(run(&config(-3, 1)), Err(FibError::Negative(-3)));
    }

    #[test]
    fn sampling_follows_powers_of_two() {
        let sampled: Vec<u32> = (0..=20).filter(|&i| is_sampled(i, 20)).collect();
        assert_eq!(sampled, vec![0, 1, 2, 4, 8, 16, 20]);
    }
}

//! Cross-kernel comparison: runs every kernel through the harness on the
//! same input and iteration count, then reports relative timings.

use super::harness::{run_and_report, Measurement};
use crate::config::Config;
use crate::error::Result;
use crate::kernels::{sqrt_standard, Avx, KernelKind};
use std::fmt;
use tracing::{info, warn};

/// `(candidate - baseline) / baseline * 100`
#[inline]
pub fn percentage_difference(baseline: f64, candidate: f64) -> f64 {
    (candidate - baseline) / baseline * 100.0
}

/// Relative timing of one kernel against another
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub subject: KernelKind,
    pub baseline: KernelKind,
    pub percent: f64,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Percentage difference between {} and {}: {}%",
            self.subject.short_name(),
            self.baseline.short_name(),
            self.percent
        )
    }
}

/// Outcome of one comparison run
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub standard: Measurement,
    pub basic_simd: Measurement,
    pub optimized_simd: Measurement,
}

impl ComparisonReport {
    pub fn measurement(&self, kind: KernelKind) -> &Measurement {
        match kind {
            KernelKind::Standard => &self.standard,
            KernelKind::BasicSimd => &self.basic_simd,
            KernelKind::OptimizedSimd => &self.optimized_simd,
        }
    }

    /// Basic vs standard, optimized vs standard, optimized vs basic
    pub fn differences(&self) -> [Difference; 3] {
        use KernelKind::*;

        [
            (BasicSimd, Standard),
            (OptimizedSimd, Standard),
            (OptimizedSimd, BasicSimd),
        ]
        .map(|(subject, baseline)| Difference {
            subject,
            baseline,
            percent: percentage_difference(
                self.measurement(baseline).elapsed_secs(),
                self.measurement(subject).elapsed_secs(),
            ),
        })
    }
}

/// Benchmark all three kernels and print the six report lines
pub fn run_comparison(config: &Config, avx: Avx) -> Result<ComparisonReport> {
    let value = config.input;
    let iterations = config.iterations;

    info!(input = value, iterations, "Running sqrt benchmarks");

    let report = ComparisonReport {
        standard: run_and_report(
            sqrt_standard,
            KernelKind::Standard.label(),
            value,
            iterations,
        )?,
        basic_simd: run_and_report(
            |v| avx.sqrt(v),
            KernelKind::BasicSimd.label(),
            value,
            iterations,
        )?,
        optimized_simd: run_and_report(
            |v| avx.sqrt_newton(v),
            KernelKind::OptimizedSimd.label(),
            value,
            iterations,
        )?,
    };

    for difference in report.differences() {
        if !difference.percent.is_finite() {
            warn!(
                subject = difference.subject.label(),
                baseline = difference.baseline.label(),
                "Baseline elapsed time too small for a percentage"
            );
        }
        println!("{}", difference);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn measurement(kind: KernelKind, millis: u64) -> Measurement {
        Measurement {
            label: kind.label().to_string(),
            result: 6.48,
            elapsed: Duration::from_millis(millis),
            iterations: 1_000,
        }
    }

    #[test]
    fn test_percentage_difference() {
        assert_eq!(percentage_difference(2.0, 3.0), 50.0);
        assert_eq!(percentage_difference(2.0, 1.0), -50.0);
        assert_eq!(percentage_difference(2.0, 2.0), 0.0);
        assert!(!percentage_difference(0.0, 1.0).is_finite());
    }

    #[test]
    fn test_differences_order_and_values() {
        let report = ComparisonReport {
            standard: measurement(KernelKind::Standard, 100),
            basic_simd: measurement(KernelKind::BasicSimd, 150),
            optimized_simd: measurement(KernelKind::OptimizedSimd, 300),
        };

        let [basic_vs_std, opt_vs_std, opt_vs_basic] = report.differences();

        assert!((basic_vs_std.percent - 50.0).abs() < 1e-9);
        assert!((opt_vs_std.percent - 200.0).abs() < 1e-9);
        assert!((opt_vs_basic.percent - 100.0).abs() < 1e-9);
        assert_eq!(opt_vs_basic.subject, KernelKind::OptimizedSimd);
        assert_eq!(opt_vs_basic.baseline, KernelKind::BasicSimd);
    }

    #[test]
    fn test_difference_display() {
        let difference = Difference {
            subject: KernelKind::BasicSimd,
            baseline: KernelKind::Standard,
            percent: -12.5,
        };

        assert_eq!(
            difference.to_string(),
            "Percentage difference between Basic SIMD and Standard: -12.5%"
        );
    }

    #[test]
    fn test_run_comparison_scenario() {
        let Ok(avx) = Avx::detect() else { return };

        let report = run_comparison(&Config::default(), avx).unwrap();

        for kind in KernelKind::ALL {
            let m = report.measurement(kind);
            assert_eq!(m.label, kind.label());
            assert_eq!(m.iterations, 1_000_000);
            assert!((m.result - 6.4807406984).abs() < 1e-9);
        }
        for difference in report.differences() {
            assert!(difference.percent.is_finite());
        }
    }

    #[test]
    fn test_run_comparison_rejects_zero_iterations() {
        let Ok(avx) = Avx::detect() else { return };

        let config = Config {
            iterations: 0,
            ..Config::default()
        };
        assert!(run_comparison(&config, avx).is_err());
    }
}

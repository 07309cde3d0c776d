//! Input packages - raw sensor records and batch processing

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::dispatch::read_package;
use crate::error::WorkoutError;
use crate::report::Summary;

/// One raw record: type code plus fields in constructor order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn summarize(&self) -> Result<Summary, WorkoutError> {
        read_package(&self.workout_type, &self.data).map(|w| w.show_training_info())
    }
}

/// Embedded sample data
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[420.0, 4.0, 20.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of packages
pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    serde_json::from_str(json).context("Failed to parse workout packages")
}

/// Load packages from a JSON file
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let packages = parse_packages(&content)
        .with_context(|| format!("Invalid packages in {}", path.display()))?;
    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// What to do with a malformed record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the batch at the first bad record
    #[default]
    Abort,
    /// Log and skip bad records
    Skip,
}

/// A record that could not be summarized
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub index: usize,
    pub package: Package,
    pub error: WorkoutError,
}

/// Batch result, summaries in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub summaries: Vec<Summary>,
    pub failures: Vec<Failure>,
}

/// Summarize every package in order.
///
/// With `ErrorPolicy::Abort` the first bad record ends the batch with an error
/// naming its index; with `ErrorPolicy::Skip` it is recorded in `failures`.
pub fn process_batch(packages: &[Package], policy: ErrorPolicy) -> Result<BatchReport> {
    process_batch_with(packages, policy, |_| {})
}

/// Like [`process_batch`], but hands each summary to `on_summary` as soon as
/// it is computed, so records before an aborting one are still emitted.
pub fn process_batch_with<F>(
    packages: &[Package],
    policy: ErrorPolicy,
    mut on_summary: F,
) -> Result<BatchReport>
where
    F: FnMut(&Summary),
{
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        match package.summarize() {
            Ok(summary) => {
                debug!("Record {}: {:?}", index, summary);
                on_summary(&summary);
                report.summaries.push(summary);
            }
            Err(error) => match policy {
                ErrorPolicy::Abort => {
                    return Err(error).with_context(|| {
                        format!("Record {} ({}) rejected", index, package.workout_type)
                    });
                }
                ErrorPolicy::Skip => {
                    warn!("Skipping record {} ({}): {}", index, package.workout_type, error);
                    report.failures.push(Failure {
                        index,
                        package: package.clone(),
                        error,
                    });
                }
            },
        }
    }

    info!(
        "Processed {} records: {} ok, {} skipped",
        packages.len(),
        report.summaries.len(),
        report.failures.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_packages() {
        let report = process_batch(&sample_packages(), ErrorPolicy::Abort).unwrap();
        let labels: Vec<_> = report.summaries.iter().map(|s| s.kind_label.as_str()).collect();
        assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_sample_output_lines() {
        let report = process_batch(&sample_packages(), ErrorPolicy::Abort).unwrap();
        let lines: Vec<String> = report.summaries.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Training kind: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                 Mean speed: 1.000 km/h; Calories spent: 336.000.",
                "Training kind: Running; Duration: 4.000 h; Distance: 0.273 km; \
                 Mean speed: 0.068 km/h; Calories spent: 14.489.",
                "Training kind: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                 Mean speed: 5.850 km/h; Calories spent: 348.945.",
            ]
        );
    }

    #[test]
    fn test_parse_packages() {
        let json = r#"[
            {"workout_type": "RUN", "data": [420, 4, 20]},
            {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
        ]"#;
        let packages = parse_packages(json).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], Package::new("RUN", &[420.0, 4.0, 20.0]));
    }

    #[test]
    fn test_parse_packages_invalid() {
        assert!(parse_packages(r#"[{"workout_type": "RUN"}]"#).is_err());
        assert!(parse_packages("not json").is_err());
    }

    #[test]
    fn test_load_packages_missing_file() {
        let err = load_packages("/nonexistent/packages.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_abort_policy_stops_at_first_error() {
        let packages = vec![
            Package::new("RUN", &[420.0, 4.0, 20.0]),
            Package::new("XYZ", &[1.0]),
            Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let err = process_batch(&packages, ErrorPolicy::Abort).unwrap_err();
        assert!(err.to_string().contains("Record 1"));
        assert_eq!(
            err.downcast_ref::<WorkoutError>(),
            Some(&WorkoutError::UnknownWorkoutKind("XYZ".to_string()))
        );
    }

    #[test]
    fn test_abort_policy_emits_records_before_failure() {
        let packages = vec![
            Package::new("RUN", &[420.0, 4.0, 20.0]),
            Package::new("XYZ", &[1.0]),
        ];
        let mut lines = Vec::new();
        let result = process_batch_with(&packages, ErrorPolicy::Abort, |summary| {
            lines.push(summary.to_string())
        });
        assert!(result.is_err());
        assert_eq!(
            lines,
            vec![
                "Training kind: Running; Duration: 4.000 h; Distance: 0.273 km; \
                 Mean speed: 0.068 km/h; Calories spent: 14.489."
            ]
        );
    }

    #[test]
    fn test_callback_sees_records_in_order() {
        let mut labels = Vec::new();
        process_batch_with(&sample_packages(), ErrorPolicy::Abort, |summary| {
            labels.push(summary.kind_label.clone())
        })
        .unwrap();
        assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_skip_policy_keeps_going() {
        let packages = vec![
            Package::new("RUN", &[420.0, 4.0, 20.0, 1.0]),
            Package::new("RUN", &[420.0, 4.0, 20.0]),
            Package::new("WLK", &[9000.0, 0.0, 75.0, 180.0]),
        ];
        let report = process_batch(&packages, ErrorPolicy::Skip).unwrap();
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].index, 0);
        assert!(matches!(report.failures[0].error, WorkoutError::ArityMismatch { .. }));
        assert_eq!(
            report.failures[1].error,
            WorkoutError::DivisionByZero { field: "duration" }
        );
    }

    #[test]
    fn test_empty_batch() {
        let report = process_batch(&[], ErrorPolicy::Abort).unwrap();
        assert!(report.summaries.is_empty());
    }
}

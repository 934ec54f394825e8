use crate::model::StudentMasterData;
use itertools::{Itertools, MinMaxResult};

/// Class-level figures printed under the master sheet table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStatistics {
    pub total_students: usize,
    pub class_average: f64,
    pub highest_average: f64,
    pub lowest_average: f64,
    pub passed: usize,
    /// Percentage of students whose average reaches the pass mark, rounded
    /// to one decimal.
    pub success_rate: f64,
}

impl ClassStatistics {
    /// Returns `None` for an empty class.
    pub fn compute(students: &[StudentMasterData], pass_mark: f64) -> Option<Self> {
        let (lowest, highest) = match students.iter().map(|s| s.average).minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(only) => (only, only),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let total = students.len();
        let class_average = students.iter().map(|s| s.average).sum::<f64>() / total as f64;
        let passed = students.iter().filter(|s| s.average >= pass_mark).count();
        let success_rate = (passed as f64 / total as f64 * 1000.0).round() / 10.0;

        Some(Self {
            total_students: total,
            class_average,
            highest_average: highest,
            lowest_average: lowest,
            passed,
            success_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students(averages: &[f64]) -> Vec<StudentMasterData> {
        averages
            .iter()
            .map(|&average| StudentMasterData { average, ..Default::default() })
            .collect()
    }

    #[test]
    fn mean_extremes_and_success_rate() {
        let class = students(&[12.0, 8.5, 10.0, 15.5, 9.99, 14.0]);
        let stats = ClassStatistics::compute(&class, 10.0).unwrap();
        assert!((stats.class_average - 69.99 / 6.0).abs() < 1e-9);
        assert_eq!(stats.highest_average, 15.5);
        assert_eq!(stats.lowest_average, 8.5);
        assert_eq!(stats.passed, 4);
        // 4 / 6 = 66.666...%
        assert_eq!(stats.success_rate, 66.7);
    }

    #[test]
    fn single_student_and_empty_class() {
        let stats = ClassStatistics::compute(&students(&[7.0]), 10.0).unwrap();
        assert_eq!((stats.lowest_average, stats.highest_average), (7.0, 7.0));
        assert_eq!(stats.success_rate, 0.0);
        assert!(ClassStatistics::compute(&[], 10.0).is_none());
    }

    #[test]
    fn pass_mark_follows_the_scale() {
        let stats = ClassStatistics::compute(&students(&[55.0, 45.0, 50.0]), 50.0).unwrap();
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.success_rate, 66.7);
    }
}

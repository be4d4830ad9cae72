//! Simulation report generation.

use super::config::{Policy, SimConfig};
use crate::game::{Collision, Difficulty};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    /// `None` when the run hit the tick limit.
    pub cause: Option<Collision>,
    pub new_high_score: bool,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub difficulty: Difficulty,
    #[serde(serialize_with = "serialize_policy")]
    pub policy: Policy,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub min_score: u32,
    pub median_score: u32,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub new_high_scores: u32,

    /// Collision cause -> number of runs it ended.
    pub causes: BTreeMap<String, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn serialize_policy<S>(policy: &Policy, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(match policy {
        Policy::Idle => "idle",
        Policy::Autopilot => "autopilot",
    })
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.cause.is_none()).count() as u32;
        let new_high_scores = runs.iter().filter(|r| r.new_high_score).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / num_runs.max(1) as f64;
        let avg_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / num_runs.max(1) as f64;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let min_score = scores.first().copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);

        let mut causes = BTreeMap::new();
        for run in &runs {
            let key = match run.cause {
                Some(cause) => format!("{:?}", cause),
                None => "Timeout".to_string(),
            };
            *causes.entry(key).or_insert(0) += 1;
        }

        Self {
            num_runs,
            difficulty: config.difficulty,
            policy: config.policy,
            runs_timed_out,
            avg_score,
            min_score,
            median_score,
            max_score,
            avg_ticks,
            new_high_scores,
            causes,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    FLAPPY SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} ({} difficulty, {:?} policy), {} timed out\n\n",
            self.num_runs, self.difficulty, self.policy, self.runs_timed_out
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:       {:.2}\n", self.avg_score));
        report.push_str(&format!("  Min Score:       {}\n", self.min_score));
        report.push_str(&format!("  Median Score:    {}\n", self.median_score));
        report.push_str(&format!("  Max Score:       {}\n", self.max_score));
        report.push_str(&format!("  Avg Ticks:       {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  New High Scores: {}\n\n", self.new_high_scores));

        report.push_str("── RUN ENDINGS ──────────────────────────────────────────────────\n");
        for (cause, count) in &self.causes {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5.1}% {}\n", cause, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, cause: Option<Collision>) -> RunStats {
        RunStats {
            score,
            ticks: 100 + score as u64 * 36,
            cause,
            new_high_score: score > 2,
        }
    }

    #[test]
    fn test_report_generation() {
        let config = SimConfig::default();
        let runs = vec![
            run(0, Some(Collision::Ground)),
            run(4, Some(Collision::LowerPipe)),
            run(7, Some(Collision::LowerPipe)),
            run(9, None),
        ];
        let report = SimReport::from_runs(runs, &config);

        assert_eq!(report.num_runs, 4);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.min_score, 0);
        assert_eq!(report.median_score, 7);
        assert_eq!(report.max_score, 9);
        assert!((report.avg_score - 5.0).abs() < 1e-9);
        assert_eq!(report.new_high_scores, 3);
        assert_eq!(report.causes.get("LowerPipe"), Some(&2));
        assert_eq!(report.causes.get("Timeout"), Some(&1));

        let text = report.to_text();
        assert!(text.contains("FLAPPY SIMULATION REPORT"));
        assert!(text.contains("Median Score:    7"));
        assert!(text.contains("LowerPipe"));
    }

    #[test]
    fn test_json_report() {
        let report = SimReport::from_runs(vec![run(3, Some(Collision::Ceiling))], &SimConfig::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["policy"], "autopilot");
        assert_eq!(value["causes"]["Ceiling"], 1);
        assert!(value.get("run_stats").is_none());
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), &SimConfig::default());
        assert_eq!(report.num_runs, 0);
        assert!((report.avg_score - 0.0).abs() < f64::EPSILON);
        assert!(report.to_text().contains("Runs: 0"));
    }
}

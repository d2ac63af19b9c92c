//! Simulation report generation.

use std::collections::BTreeMap;

/// How a simulated run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunEnd {
    Victory,
    GameOver,
    TimedOut,
}

/// Statistics for one simulated run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub end: RunEnd,
    pub final_score: u64,
    pub final_level: u32,
    pub distance: f64,
    pub ticks: u64,
    pub gems_collected: u32,
    pub items_bought: u32,
    pub items_used: u32,
    pub hits_blocked: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub game_overs: u32,
    pub timed_out: u32,

    pub avg_score: f64,
    pub avg_level: f64,
    pub avg_distance: f64,
    pub avg_ticks: f64,
    pub avg_items_used: f64,
    pub avg_hits_blocked: f64,

    /// Runs by final level.
    pub level_distribution: BTreeMap<u32, u32>,

    pub run_stats: Vec<RunStats>,
}

fn average<F: Fn(&RunStats) -> f64>(runs: &[RunStats], f: F) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let count = |end: RunEnd| runs.iter().filter(|r| r.end == end).count() as u32;

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            num_runs: runs.len() as u32,
            victories: count(RunEnd::Victory),
            game_overs: count(RunEnd::GameOver),
            timed_out: count(RunEnd::TimedOut),
            avg_score: average(&runs, |r| r.final_score as f64),
            avg_level: average(&runs, |r| r.final_level as f64),
            avg_distance: average(&runs, |r| r.distance),
            avg_ticks: average(&runs, |r| r.ticks as f64),
            avg_items_used: average(&runs, |r| r.items_used as f64),
            avg_hits_blocked: average(&runs, |r| r.hits_blocked as f64),
            level_distribution,
            run_stats: runs,
        }
    }

    pub fn victory_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.victories as f64 / self.num_runs as f64
    }

    pub fn print(&self) {
        println!("Runs:           {}", self.num_runs);
        println!(
            "Victories:      {} ({:.1}%)",
            self.victories,
            self.victory_rate() * 100.0
        );
        println!("Game overs:     {}", self.game_overs);
        println!("Timed out:      {}", self.timed_out);
        println!();
        println!("Avg score:      {:.0}", self.avg_score);
        println!("Avg level:      {:.2}", self.avg_level);
        println!("Avg distance:   {:.0}", self.avg_distance);
        println!("Avg frames:     {:.0}", self.avg_ticks);
        println!("Avg items used: {:.2}", self.avg_items_used);
        println!("Avg blocks:     {:.2}", self.avg_hits_blocked);
        println!();
        println!("Final level distribution:");
        for (level, runs) in &self.level_distribution {
            println!("  Level {}: {}", level, runs);
        }
    }
}

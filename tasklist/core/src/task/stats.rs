/// Counts derived from a task list. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    pub fn new(total: usize, completed: usize) -> Self {
        Stats { total, completed }
    }

    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Share of completed tasks as a whole percentage, rounding halves up.
    /// An empty list is 0%.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percentage(self.percentage())
    }
}

/// Coarse progress band used to colour the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Low,
    Medium,
    High,
}

impl ProgressTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ProgressTier::High,
            40.. => ProgressTier::Medium,
            _ => ProgressTier::Low,
        }
    }
}

//! Report types shared by the seeding and backfill scripts.

#[derive(Debug, Clone)]
pub struct SeededItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct FailedItem {
    pub label: String,
    pub error: String,
}

/// Outcome of inserting a fixed list of documents one by one.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub added: Vec<SeededItem>,
    pub failed: Vec<FailedItem>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.added.len() + self.failed.len()
    }
}

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct CollectionCleanup {
    pub collection: &'static str,
    pub deleted: Vec<String>,
}

#[derive(Debug)]
pub struct CleanupReport {
    pub cutoff: DateTime<Utc>,
    pub collections: Vec<CollectionCleanup>,
}

impl CleanupReport {
    pub fn total_deleted(&self) -> usize {
        self.collections.iter().map(|c| c.deleted.len()).sum()
    }
}

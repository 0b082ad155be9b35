use crate::modules::report::FailedItem;

#[derive(Debug, Clone)]
pub struct UpdatedPlan {
    pub id: String,
    pub name: String,
    pub classes_per_month: Option<i64>,
}

#[derive(Debug, Default)]
pub struct PlanBackfillReport {
    pub updated: Vec<UpdatedPlan>,
    pub unknown: Vec<String>,
    pub failed: Vec<FailedItem>,
}

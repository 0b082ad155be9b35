use crate::error::AdminError;
use crate::modules::plans::{
    crud::PlanCrud,
    model::describe_allowance,
    schema::{PlanBackfillReport, UpdatedPlan},
    seed::{allowance_for, CATALOG},
};
use crate::modules::report::{FailedItem, SeedReport, SeededItem};
use crate::store::DocumentStore;

/// Inserts the catalog plans. A failed insert is recorded and the rest continue.
pub async fn seed(store: &dyn DocumentStore) -> Result<SeedReport, AdminError> {
    let crud = PlanCrud::new(store);
    let mut report = SeedReport::default();

    for plan in CATALOG {
        let label = format!("{} - ${}", plan.name, plan.price);
        match crud.create(plan).await {
            Ok(id) => {
                tracing::info!(%id, name = plan.name, "plan added");
                report.added.push(SeededItem { id, label });
            }
            Err(e) => {
                tracing::warn!(name = plan.name, error = %e, "plan insert failed");
                report.failed.push(FailedItem {
                    label,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Writes `classesPerMonth` onto every plan whose name is in the allowance table.
pub async fn backfill_classes(store: &dyn DocumentStore) -> Result<PlanBackfillReport, AdminError> {
    let crud = PlanCrud::new(store);
    let mut report = PlanBackfillReport::default();

    for plan in crud.find_all().await? {
        let Some(classes_per_month) = allowance_for(&plan.name) else {
            tracing::warn!(id = %plan.id, name = %plan.name, "unknown plan");
            report.unknown.push(plan.name);
            continue;
        };

        match crud.set_classes_per_month(&plan.id, classes_per_month).await {
            Ok(()) => {
                tracing::info!(
                    name = %plan.name,
                    allowance = %describe_allowance(classes_per_month),
                    "plan updated"
                );
                report.updated.push(UpdatedPlan {
                    id: plan.id,
                    name: plan.name,
                    classes_per_month,
                });
            }
            Err(e) => {
                tracing::warn!(name = %plan.name, error = %e, "plan update failed");
                report.failed.push(FailedItem {
                    label: plan.name,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

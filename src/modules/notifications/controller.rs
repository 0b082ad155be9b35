use chrono::{DateTime, Duration, Utc};

use crate::error::AdminError;
use crate::modules::notifications::{
    crud::{NotificationCrud, NOTIFICATIONS, SCHEDULED_NOTIFICATIONS},
    schema::{CleanupReport, CollectionCleanup},
};
use crate::store::DocumentStore;

pub const RETENTION_DAYS: i64 = 30;
/// Per collection and per run.
pub const BATCH_LIMIT: usize = 500;

/// Deletes delivered notifications and reminders older than [`RETENTION_DAYS`].
pub async fn cleanup_sent(
    store: &dyn DocumentStore,
    now: DateTime<Utc>,
) -> Result<CleanupReport, AdminError> {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    let mut collections = Vec::new();

    for collection in [NOTIFICATIONS, SCHEDULED_NOTIFICATIONS] {
        let crud = NotificationCrud::new(store, collection);
        let ids = crud.find_sent_before(cutoff, BATCH_LIMIT).await?;

        for id in &ids {
            crud.delete(id).await?;
        }
        tracing::info!(collection = crud.collection(), deleted = ids.len(), "old notifications removed");

        collections.push(CollectionCleanup {
            collection,
            deleted: ids,
        });
    }

    Ok(CleanupReport {
        cutoff,
        collections,
    })
}

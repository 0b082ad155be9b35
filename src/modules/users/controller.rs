use crate::error::AdminError;
use crate::modules::plans::crud::PlanCrud;
use crate::modules::users::{
    crud::UserCrud,
    model::{AllowanceFix, ACTIVE_MEMBERSHIP, CLASSES_PER_MONTH, LEGACY_CLASS_LIMIT},
    schema::{
        AllowanceBackfillReport, AssignPlanArgs, AssignPlanReport, CleanedUser, InspectUserArgs,
        MigratedUser, UserInspection,
    },
};
use crate::store::{DocumentStore, Fields};

pub async fn inspect(
    store: &dyn DocumentStore,
    args: &InspectUserArgs,
) -> Result<UserInspection, AdminError> {
    let user = UserCrud::new(store)
        .find_by_email(&args.email)
        .await?
        .ok_or_else(|| AdminError::UserNotFound(args.email.clone()))?;

    Ok(UserInspection {
        plan_name: user.field("planName").cloned(),
        class_limit: user.field(LEGACY_CLASS_LIMIT).cloned(),
        classes_per_month: user.field(CLASSES_PER_MONTH).cloned(),
        membership_status: user.field("membershipStatus").cloned(),
        email: args.email.clone(),
        id: user.id,
        fields: user.fields,
    })
}

/// Moves every user off the legacy `classLimit` field.
pub async fn backfill_classes_per_month(
    store: &dyn DocumentStore,
) -> Result<AllowanceBackfillReport, AdminError> {
    let crud = UserCrud::new(store);
    let mut report = AllowanceBackfillReport::default();

    for user in crud.find_all().await? {
        let fix = user.allowance_fix();
        let Some(update) = fix.update() else {
            report.untouched.push(user.display_email().to_string());
            continue;
        };

        crud.update(&user.id, update).await?;
        let email = user.display_email().to_string();

        match fix {
            AllowanceFix::Migrate { legacy } => {
                tracing::info!(id = %user.id, %email, %legacy, "migrated classLimit to classesPerMonth");
                report.migrated.push(MigratedUser {
                    id: user.id,
                    email,
                    previous_limit: legacy,
                });
            }
            AllowanceFix::DropLegacy { legacy, current } => {
                tracing::info!(id = %user.id, %email, %legacy, "dropped classLimit");
                report.cleaned.push(CleanedUser {
                    id: user.id,
                    email,
                    dropped_limit: legacy,
                    classes_per_month: current,
                });
            }
            AllowanceFix::Keep => {}
        }
    }

    Ok(report)
}

/// Points a user at an active plan and copies the plan's class allowance.
/// The allowance is copied as stored; unlimited plans (absent or null)
/// remove `classesPerMonth` from the user.
pub async fn assign_plan(
    store: &dyn DocumentStore,
    args: &AssignPlanArgs,
) -> Result<AssignPlanReport, AdminError> {
    let plans = PlanCrud::new(store);

    let Some(plan) = plans.find_active_by_name(&args.plan_name).await? else {
        let available = plans
            .find_active()
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        return Err(AdminError::PlanNotFound {
            name: args.plan_name.clone(),
            available,
        });
    };
    tracing::info!(id = %plan.id, name = %plan.name, "plan found");

    let users = UserCrud::new(store);
    let user = users
        .find_by_email(&args.email)
        .await?
        .ok_or_else(|| AdminError::UserNotFound(args.email.clone()))?;

    let update = Fields::new()
        .set("planId", plan.id.as_str())
        .set("planName", args.plan_name.as_str())
        .set("membershipStatus", ACTIVE_MEMBERSHIP)
        .server_timestamp("updatedAt");
    let classes_per_month = plan.allowance().cloned();
    let update = match &classes_per_month {
        Some(allowance) => update.set(CLASSES_PER_MONTH, allowance.clone()),
        None => update.delete(CLASSES_PER_MONTH),
    };

    users.update(&user.id, update).await?;
    tracing::info!(user = %user.id, plan = %plan.id, "user plan updated");

    Ok(AssignPlanReport {
        user_id: user.id,
        email: args.email.clone(),
        plan_id: plan.id,
        plan_name: args.plan_name.clone(),
        classes_per_month,
    })
}

mod common;

use gym_admin::modules::users::controller;
use gym_admin::modules::users::schema::{AssignPlanArgs, InspectUserArgs};
use gym_admin::store::{DocumentStore, Fields, Value};
use gym_admin::AdminError;

fn assign_args(email: &str, plan: &str) -> AssignPlanArgs {
    AssignPlanArgs::from_args(&[email.to_string(), plan.to_string()]).unwrap()
}

#[tokio::test]
async fn test_backfill_migrates_legacy_only_user() {
    let store = common::store();
    common::put(
        &store,
        "users",
        "u1",
        Fields::new().set("email", "legacy@example.com").set("classLimit", 8i64),
    )
    .await;

    let report = controller::backfill_classes_per_month(&store).await.unwrap();

    assert_eq!(report.migrated.len(), 1);
    assert_eq!(report.migrated[0].previous_limit, Value::Integer(8));
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.i64_field("classesPerMonth"), Some(4));
    assert!(!doc.contains("classLimit"));
}

#[tokio::test]
async fn test_backfill_drops_legacy_when_both_present() {
    let store = common::store();
    common::put(
        &store,
        "users",
        "u1",
        Fields::new()
            .set("email", "both@example.com")
            .set("classLimit", 8i64)
            .set("classesPerMonth", 12i64),
    )
    .await;

    let report = controller::backfill_classes_per_month(&store).await.unwrap();

    assert_eq!(report.cleaned.len(), 1);
    assert!(report.migrated.is_empty());
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.i64_field("classesPerMonth"), Some(12));
    assert!(!doc.contains("classLimit"));
}

#[tokio::test]
async fn test_backfill_leaves_other_users_untouched() {
    let store = common::store();
    common::user(&store, "u1", "neither@example.com").await;
    common::put(
        &store,
        "users",
        "u2",
        Fields::new().set("email", "current@example.com").set("classesPerMonth", 8i64),
    )
    .await;
    let before = store.list("users").await.unwrap();

    let report = controller::backfill_classes_per_month(&store).await.unwrap();

    assert_eq!(report.untouched, vec!["neither@example.com", "current@example.com"]);
    assert_eq!(store.list("users").await.unwrap(), before);
}

#[tokio::test]
async fn test_inspect_reports_missing_fields() {
    let store = common::store();
    common::user(&store, "u1", "ana@example.com").await;

    let args = InspectUserArgs::from_args(&["ana@example.com".to_string()]).unwrap();
    let inspection = controller::inspect(&store, &args).await.unwrap();

    assert_eq!(inspection.id, "u1");
    assert_eq!(inspection.membership_status, Some(Value::from("pending")));
    assert!(inspection.class_limit.is_none());
    assert!(inspection.plan_name.is_none());
    assert_eq!(inspection.fields.len(), 2);
}

#[tokio::test]
async fn test_inspect_unknown_user() {
    let store = common::store();

    let args = InspectUserArgs::from_args(&["nobody@example.com".to_string()]).unwrap();
    let result = controller::inspect(&store, &args).await;

    assert!(matches!(result, Err(AdminError::UserNotFound(email)) if email == "nobody@example.com"));
}

#[tokio::test]
async fn test_assign_limited_plan_copies_allowance() {
    let store = common::store();
    common::user(&store, "u1", "ana@example.com").await;
    common::plan(&store, "p4", "Plan Iniciado", Some(4), true).await;

    let report = controller::assign_plan(&store, &assign_args("ana@example.com", "Plan Iniciado"))
        .await
        .unwrap();

    assert_eq!(report.plan_id, "p4");
    assert_eq!(report.classes_per_month, Some(Value::Integer(4)));
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.str_field("planId"), Some("p4"));
    assert_eq!(doc.str_field("planName"), Some("Plan Iniciado"));
    assert_eq!(doc.str_field("membershipStatus"), Some("active"));
    assert_eq!(doc.i64_field("classesPerMonth"), Some(4));
    assert!(matches!(doc.get("updatedAt"), Some(Value::Timestamp(_))));
}

#[tokio::test]
async fn test_assign_unlimited_plan_removes_allowance() {
    let store = common::store();
    common::put(
        &store,
        "users",
        "u1",
        Fields::new().set("email", "ana@example.com").set("classesPerMonth", 4i64),
    )
    .await;
    common::plan(&store, "p5", "Plan Peleador", None, true).await;

    let report = controller::assign_plan(&store, &assign_args("ana@example.com", "Plan Peleador"))
        .await
        .unwrap();

    assert_eq!(report.classes_per_month, None);
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert!(!doc.contains("classesPerMonth"));
    assert_eq!(doc.str_field("planName"), Some("Plan Peleador"));
}

#[tokio::test]
async fn test_assign_plan_copies_non_integer_allowance_as_stored() {
    let store = common::store();
    common::put(
        &store,
        "users",
        "u1",
        Fields::new().set("email", "ana@example.com").set("classesPerMonth", 4i64),
    )
    .await;
    common::put(
        &store,
        "plans",
        "p3",
        Fields::new()
            .set("name", "Plan Guerrero")
            .set("classesPerMonth", "8")
            .set("active", true),
    )
    .await;

    let report = controller::assign_plan(&store, &assign_args("ana@example.com", "Plan Guerrero"))
        .await
        .unwrap();

    assert_eq!(report.classes_per_month, Some(Value::from("8")));
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.get("classesPerMonth"), Some(&Value::from("8")));
}

#[tokio::test]
async fn test_assign_plan_without_allowance_field_removes_it() {
    let store = common::store();
    common::put(
        &store,
        "users",
        "u1",
        Fields::new().set("email", "ana@example.com").set("classesPerMonth", 4i64),
    )
    .await;
    common::put(
        &store,
        "plans",
        "p5",
        Fields::new().set("name", "Plan Peleador").set("active", true),
    )
    .await;

    let report = controller::assign_plan(&store, &assign_args("ana@example.com", "Plan Peleador"))
        .await
        .unwrap();

    assert_eq!(report.classes_per_month, None);
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert!(!doc.contains("classesPerMonth"));
}

#[tokio::test]
async fn test_lookup_accepts_any_stored_email() {
    let store = common::store();
    common::user(&store, "u1", "admin").await;

    let args = InspectUserArgs::from_args(&["admin".to_string()]).unwrap();
    let inspection = controller::inspect(&store, &args).await.unwrap();

    assert_eq!(inspection.id, "u1");
}

#[tokio::test]
async fn test_assign_inactive_plan_lists_active_ones() {
    let store = common::store();
    common::user(&store, "u1", "ana@example.com").await;
    common::plan(&store, "p1", "Plan Novato", Some(1), true).await;
    common::plan(&store, "p2", "Plan Retirado", Some(2), false).await;

    let result = controller::assign_plan(&store, &assign_args("ana@example.com", "Plan Retirado")).await;

    match result {
        Err(AdminError::PlanNotFound { name, available }) => {
            assert_eq!(name, "Plan Retirado");
            assert_eq!(available, vec!["Plan Novato".to_string()]);
        }
        other => panic!("expected PlanNotFound, got {:?}", other),
    }
    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert!(!doc.contains("planId"));
}

#[tokio::test]
async fn test_assign_plan_unknown_user() {
    let store = common::store();
    common::plan(&store, "p1", "Plan Novato", Some(1), true).await;

    let result = controller::assign_plan(&store, &assign_args("ghost@example.com", "Plan Novato")).await;

    assert!(matches!(result, Err(AdminError::UserNotFound(_))));
}

#[test]
fn test_assign_args_validation() {
    assert!(matches!(
        AssignPlanArgs::from_args(&["ana@example.com".to_string()]),
        Err(AdminError::Usage(_))
    ));
    assert!(matches!(
        AssignPlanArgs::from_args(&["   ".to_string(), "Plan Novato".to_string()]),
        Err(AdminError::InvalidArgs(_))
    ));
    assert!(matches!(
        AssignPlanArgs::from_args(&["ana@example.com".to_string(), "  ".to_string()]),
        Err(AdminError::InvalidArgs(_))
    ));
}

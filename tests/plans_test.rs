mod common;

use gym_admin::modules::plans::controller;
use gym_admin::modules::plans::seed::{allowance_for, CATALOG};
use gym_admin::store::{DocumentStore, Query, Value};

#[tokio::test]
async fn test_seed_adds_catalog() {
    let store = common::store();

    let report = controller::seed(&store).await.unwrap();

    assert_eq!(report.added.len(), CATALOG.len());
    assert_eq!(report.total(), CATALOG.len());
    assert_eq!(report.added[0].label, "Plan Novato - $10000");

    let unlimited = store
        .query(&Query::collection("plans").where_eq("name", "Plan Peleador"))
        .await
        .unwrap();
    assert_eq!(unlimited.len(), 1);
    assert_eq!(unlimited[0].get("classesPerMonth"), Some(&Value::Null));
    assert_eq!(
        unlimited[0].str_field("description"),
        Some("Clases ilimitadas - Entrena todos los días")
    );
    assert_eq!(unlimited[0].get("updatedAt"), Some(&Value::Null));
    assert!(matches!(unlimited[0].get("createdAt"), Some(Value::Timestamp(_))));
}

#[tokio::test]
async fn test_backfill_sets_known_allowances() {
    let store = common::store();
    common::plan(&store, "p1", "Plan Guerrero", None, true).await;
    common::plan(&store, "p2", "Plan Peleador", Some(30), true).await;
    common::plan(&store, "p3", "Plan Especial", Some(2), true).await;

    let report = controller::backfill_classes(&store).await.unwrap();

    assert_eq!(report.updated.len(), 2);
    assert_eq!(report.unknown, vec!["Plan Especial".to_string()]);
    assert!(report.failed.is_empty());

    let guerrero = store.get("plans", "p1").await.unwrap().unwrap();
    assert_eq!(guerrero.i64_field("classesPerMonth"), Some(8));

    // Unlimited is written as an explicit null.
    let peleador = store.get("plans", "p2").await.unwrap().unwrap();
    assert_eq!(peleador.get("classesPerMonth"), Some(&Value::Null));

    let especial = store.get("plans", "p3").await.unwrap().unwrap();
    assert_eq!(especial.i64_field("classesPerMonth"), Some(2));
}

#[test]
fn test_allowance_table() {
    assert_eq!(allowance_for("Plan Novato"), Some(Some(1)));
    assert_eq!(allowance_for("Plan Nak Muay"), Some(Some(12)));
    assert_eq!(allowance_for("Plan Peleador"), Some(None));
    assert_eq!(allowance_for("plan novato"), None);
}

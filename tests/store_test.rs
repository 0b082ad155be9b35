use gym_admin::store::{DocumentStore, Fields, FilterOp, MemoryStore, Query, StoreError, Value};

#[tokio::test]
async fn test_update_merges_and_deletes_fields() {
    let store = MemoryStore::new();
    store
        .set("users", "u1", Fields::new().set("email", "a@example.com").set("classLimit", 8i64))
        .await
        .unwrap();

    store
        .update(
            "users",
            "u1",
            Fields::new()
                .set("classesPerMonth", 4i64)
                .delete("classLimit")
                .server_timestamp("updatedAt"),
        )
        .await
        .unwrap();

    let doc = store.get("users", "u1").await.unwrap().unwrap();
    assert_eq!(doc.str_field("email"), Some("a@example.com"));
    assert_eq!(doc.i64_field("classesPerMonth"), Some(4));
    assert!(!doc.contains("classLimit"));
    assert!(matches!(doc.get("updatedAt"), Some(Value::Timestamp(_))));
}

#[tokio::test]
async fn test_update_missing_document_fails() {
    let store = MemoryStore::new();

    let result = store.update("users", "ghost", Fields::new().set("a", 1i64)).await;

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
async fn test_set_rejects_delete_sentinel() {
    let store = MemoryStore::new();

    let result = store.set("users", "u1", Fields::new().delete("classLimit")).await;

    assert!(matches!(result, Err(StoreError::InvalidWrite(_))));
    assert_eq!(store.count("users"), 0);
}

#[tokio::test]
async fn test_set_overwrites_whole_document() {
    let store = MemoryStore::new();
    store
        .set("config", "flags", Fields::new().set("a", true).set("b", true))
        .await
        .unwrap();

    store.set("config", "flags", Fields::new().set("a", false)).await.unwrap();

    let doc = store.get("config", "flags").await.unwrap().unwrap();
    assert_eq!(doc.bool_field("a"), Some(false));
    assert!(!doc.contains("b"));
}

#[tokio::test]
async fn test_query_filters_limits_and_orders_by_id() {
    let store = MemoryStore::new();
    for (id, status) in [("b3", "confirmed"), ("b1", "confirmed"), ("b2", "cancelled"), ("b4", "confirmed")] {
        store
            .set("bookings", id, Fields::new().set("status", status).set("userId", "u1"))
            .await
            .unwrap();
    }

    let query = Query::collection("bookings")
        .where_eq("userId", "u1")
        .where_eq("status", "confirmed")
        .limit(2);
    let docs = store.query(&query).await.unwrap();

    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
}

#[tokio::test]
async fn test_missing_field_never_matches() {
    let store = MemoryStore::new();
    store.set("plans", "p1", Fields::new().set("name", "Plan Novato")).await.unwrap();

    let query = Query::collection("plans").where_eq("active", true);

    assert!(store.query(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_numeric_filters_mix_integers_and_doubles() {
    let store = MemoryStore::new();
    store.set("plans", "p1", Fields::new().set("price", 10000.0)).await.unwrap();
    store.set("plans", "p2", Fields::new().set("price", 65000i64)).await.unwrap();

    let equal = Query::collection("plans").where_eq("price", 10000i64);
    let cheap = Query::collection("plans").where_op("price", FilterOp::LessThan, 50000i64);

    assert_eq!(store.query(&equal).await.unwrap()[0].id, "p1");
    assert_eq!(store.query(&cheap).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_generates_distinct_ids_and_delete_is_idempotent() {
    let store = MemoryStore::new();

    let first = store.add("plans", Fields::new().set("name", "A")).await.unwrap();
    let second = store.add("plans", Fields::new().set("name", "B")).await.unwrap();
    assert_ne!(first, second);
    assert_eq!(store.list("plans").await.unwrap().len(), 2);

    store.delete("plans", &first).await.unwrap();
    store.delete("plans", &first).await.unwrap();
    assert!(store.get("plans", &first).await.unwrap().is_none());
    assert_eq!(store.count("plans"), 1);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::from(vec![1i64, 3, 5]).to_string(), "[1, 3, 5]");
    assert_eq!(Value::from(None::<i64>).to_string(), "null");
    assert_eq!(Value::from("Plan Iniciado").to_string(), "Plan Iniciado");
}

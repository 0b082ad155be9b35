#![allow(dead_code)]

use gym_admin::store::{DocumentStore, Fields, MemoryStore};

pub fn store() -> MemoryStore {
    MemoryStore::new()
}

pub async fn put(store: &MemoryStore, collection: &str, id: &str, fields: Fields) {
    store.set(collection, id, fields).await.unwrap();
}

pub async fn user(store: &MemoryStore, id: &str, email: &str) {
    put(
        store,
        "users",
        id,
        Fields::new()
            .set("email", email)
            .set("membershipStatus", "pending"),
    )
    .await;
}

pub async fn booking(store: &MemoryStore, id: &str, user_id: &str, schedule_id: &str, status: &str) {
    put(
        store,
        "bookings",
        id,
        Fields::new()
            .set("userId", user_id)
            .set("scheduleId", schedule_id)
            .set("status", status)
            .set("scheduleType", "Muay Thai")
            .set("classDate", "2025-01-15"),
    )
    .await;
}

pub async fn schedule(store: &MemoryStore, id: &str, time: &str) {
    put(
        store,
        "class_schedules",
        id,
        Fields::new()
            .set("time", time)
            .set("type", "Muay Thai")
            .set("daysOfWeek", vec![1i64, 3, 5]),
    )
    .await;
}

pub async fn plan(store: &MemoryStore, id: &str, name: &str, classes_per_month: Option<i64>, active: bool) {
    put(
        store,
        "plans",
        id,
        Fields::new()
            .set("name", name)
            .set("classesPerMonth", classes_per_month)
            .set("active", active),
    )
    .await;
}

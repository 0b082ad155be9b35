mod common;

use gym_admin::modules::bookings::controller;
use gym_admin::modules::bookings::schema::CancelBookingsArgs;
use gym_admin::store::{DocumentStore, Value};
use gym_admin::AdminError;

fn args(email: &str, quantity: &str) -> CancelBookingsArgs {
    CancelBookingsArgs::from_args(&[email.to_string(), quantity.to_string()]).unwrap()
}

#[tokio::test]
async fn test_cancel_limits_to_quantity() {
    let store = common::store();
    common::user(&store, "u1", "ana@example.com").await;
    common::booking(&store, "b1", "u1", "s1", "confirmed").await;
    common::booking(&store, "b2", "u1", "s1", "confirmed").await;
    common::booking(&store, "b3", "u1", "s2", "confirmed").await;

    let report = controller::cancel_confirmed(&store, &args("ana@example.com", "2"))
        .await
        .unwrap();

    assert_eq!(report.user_id, "u1");
    assert_eq!(report.cancelled.len(), 2);
    assert_eq!(report.cancelled[0].schedule_type, "Muay Thai");
    assert_eq!(report.cancelled[0].class_date.as_deref(), Some("2025-01-15"));

    let b1 = store.get("bookings", "b1").await.unwrap().unwrap();
    assert_eq!(b1.str_field("status"), Some("cancelled"));
    assert_eq!(b1.str_field("cancellationReason"), Some("Cancelado por script de prueba"));
    assert!(matches!(b1.get("cancelledAt"), Some(Value::Timestamp(_))));
    assert!(matches!(b1.get("updatedAt"), Some(Value::Timestamp(_))));

    let b3 = store.get("bookings", "b3").await.unwrap().unwrap();
    assert_eq!(b3.str_field("status"), Some("confirmed"));
}

#[tokio::test]
async fn test_cancel_only_touches_that_users_confirmed_bookings() {
    let store = common::store();
    common::user(&store, "u1", "ana@example.com").await;
    common::user(&store, "u2", "beto@example.com").await;
    common::booking(&store, "b1", "u1", "s1", "cancelled").await;
    common::booking(&store, "b2", "u2", "s1", "confirmed").await;
    common::booking(&store, "b3", "u1", "s1", "confirmed").await;

    let report = controller::cancel_confirmed(&store, &args("ana@example.com", "10"))
        .await
        .unwrap();

    assert_eq!(report.cancelled.len(), 1);
    assert_eq!(report.cancelled[0].id, "b3");
    let other = store.get("bookings", "b2").await.unwrap().unwrap();
    assert_eq!(other.str_field("status"), Some("confirmed"));
}

#[tokio::test]
async fn test_cancel_without_confirmed_bookings_fails() {
    let store = common::store();
    common::user(&store, "u1", "ana@example.com").await;
    common::booking(&store, "b1", "u1", "s1", "cancelled").await;

    let result = controller::cancel_confirmed(&store, &args("ana@example.com", "1")).await;

    assert!(matches!(result, Err(AdminError::NoConfirmedBookings)));
}

#[tokio::test]
async fn test_cancel_unknown_user_fails() {
    let store = common::store();

    let result = controller::cancel_confirmed(&store, &args("ghost@example.com", "1")).await;

    assert!(matches!(result, Err(AdminError::UserNotFound(_))));
}

#[test]
fn test_cancel_args_validation() {
    let parse = |a: &str, b: &str| CancelBookingsArgs::from_args(&[a.to_string(), b.to_string()]);

    assert!(matches!(parse("ana@example.com", "many"), Err(AdminError::Usage(_))));
    assert!(matches!(parse("ana@example.com", "0"), Err(AdminError::InvalidArgs(_))));
    assert!(matches!(parse(" ", "1"), Err(AdminError::InvalidArgs(_))));
    assert_eq!(parse("ana", "1").unwrap().email, "ana");
    assert!(matches!(CancelBookingsArgs::from_args(&[]), Err(AdminError::Usage(_))));
    assert_eq!(parse("ana@example.com", "3").unwrap().quantity, 3);
}

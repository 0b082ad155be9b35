use crate::error::AdminError;
use crate::modules::bookings::{
    crud::BookingCrud,
    schema::{CancelBookingsArgs, CancelReport, CancelledBooking},
};
use crate::modules::users::crud::UserCrud;
use crate::store::DocumentStore;

pub const CANCELLATION_REASON: &str = "Cancelado por script de prueba";

/// Cancels up to `quantity` of the user's confirmed bookings.
pub async fn cancel_confirmed(
    store: &dyn DocumentStore,
    args: &CancelBookingsArgs,
) -> Result<CancelReport, AdminError> {
    let user = UserCrud::new(store)
        .find_by_email(&args.email)
        .await?
        .ok_or_else(|| AdminError::UserNotFound(args.email.clone()))?;
    tracing::info!(id = %user.id, email = %args.email, "user found");

    let crud = BookingCrud::new(store);
    let bookings = crud
        .find_confirmed_for_user(&user.id, args.quantity as usize)
        .await?;
    if bookings.is_empty() {
        return Err(AdminError::NoConfirmedBookings);
    }
    tracing::info!(count = bookings.len(), "confirmed bookings found");

    let mut cancelled = Vec::with_capacity(bookings.len());
    for booking in bookings {
        crud.cancel(&booking.id, CANCELLATION_REASON).await?;
        tracing::info!(id = %booking.id, "booking cancelled");

        cancelled.push(CancelledBooking {
            schedule_type: booking.schedule_type.unwrap_or_else(|| "Class".to_string()),
            class_date: booking.class_date.map(|d| d.to_string()),
            id: booking.id,
        });
    }

    Ok(CancelReport {
        user_id: user.id,
        cancelled,
    })
}

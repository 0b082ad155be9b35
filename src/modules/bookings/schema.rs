use validator::Validate;

use crate::error::AdminError;

#[derive(Debug, Validate)]
pub struct CancelBookingsArgs {
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

impl CancelBookingsArgs {
    pub fn from_args(args: &[String]) -> Result<Self, AdminError> {
        let usage = || AdminError::Usage("cancel_bookings <email> <quantity>".to_string());

        let [email, quantity] = args else {
            return Err(usage());
        };
        let quantity = quantity.trim().parse::<u32>().map_err(|_| usage())?;

        let parsed = Self {
            email: email.trim().to_string(),
            quantity,
        };
        parsed.validate()?;
        Ok(parsed)
    }
}

#[derive(Debug, Clone)]
pub struct CancelledBooking {
    pub id: String,
    pub schedule_type: String,
    pub class_date: Option<String>,
}

#[derive(Debug)]
pub struct CancelReport {
    pub user_id: String,
    pub cancelled: Vec<CancelledBooking>,
}

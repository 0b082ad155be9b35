pub mod bookings;
pub mod notifications;
pub mod plans;
pub mod report;
pub mod schedules;
pub mod settings;
pub mod users;

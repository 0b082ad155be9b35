use crate::modules::schedules::remap::ScheduleRemap;

#[derive(Debug, Clone)]
pub struct ReassignedBooking {
    pub booking_id: String,
    pub old_schedule_id: String,
    pub new_schedule_id: String,
}

#[derive(Debug, Clone)]
pub struct CreatedSchedule {
    pub id: String,
    pub time: String,
    pub duration_hours: f64,
}

#[derive(Debug)]
pub struct RecreateReport {
    pub remap: ScheduleRemap,
    pub bookings_updated: Vec<ReassignedBooking>,
    pub removed: Vec<String>,
    pub created: Vec<CreatedSchedule>,
}

use crate::store::{Document, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: String,
    pub schedule_id: Option<String>,
    pub class_date: Option<Value>,
    pub schedule_type: Option<String>,
}

impl Booking {
    pub fn from_document(doc: Document) -> Self {
        Self {
            schedule_id: doc.string_field("scheduleId"),
            class_date: doc.get("classDate").cloned(),
            schedule_type: doc.string_field("scheduleType"),
            id: doc.id,
        }
    }
}

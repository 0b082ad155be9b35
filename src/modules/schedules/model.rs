use crate::store::{Document, Fields, Value};

/// An existing schedule document; only its time matters for remapping.
#[derive(Debug, Clone)]
pub struct ClassSchedule {
    pub id: String,
    pub time: Option<String>,
}

impl ClassSchedule {
    pub fn from_document(doc: Document) -> Self {
        Self {
            time: doc.string_field("time"),
            id: doc.id,
        }
    }
}

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Weekdays are numbered 1 (Monday) through 7 (Sunday).
pub fn day_names(days: &[u32]) -> String {
    days.iter()
        .filter_map(|d| d.checked_sub(1).and_then(|i| DAY_NAMES.get(i as usize)))
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// A schedule in the replacement set, stored under a descriptive ID.
#[derive(Debug, Clone, Copy)]
pub struct ReplacementSchedule {
    pub id: &'static str,
    pub time: &'static str,
    pub class_type: &'static str,
    pub instructor: &'static str,
    pub capacity: i64,
    pub days: &'static [u32],
    pub duration_minutes: i64,
}

impl ReplacementSchedule {
    pub fn to_fields(&self, display_order: i64) -> Fields {
        Fields::new()
            .set("time", self.time)
            .set("type", self.class_type)
            .set("instructor", self.instructor)
            .set("capacity", self.capacity)
            .set("daysOfWeek", self.days)
            .set("durationMinutes", self.duration_minutes)
            .set("active", true)
            .set("displayOrder", display_order)
            .server_timestamp("createdAt")
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes as f64 / 60.0
    }
}

/// A schedule from the first catalog seed, stored under a generated ID.
#[derive(Debug, Clone, Copy)]
pub struct NewSchedule {
    pub time: &'static str,
    pub instructor: &'static str,
    pub class_type: &'static str,
    pub capacity: i64,
    pub days: &'static [u32],
    pub display_order: i64,
}

impl NewSchedule {
    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .set("time", self.time)
            .set("instructor", self.instructor)
            .set("type", self.class_type)
            .set("capacity", self.capacity)
            .set("daysOfWeek", self.days)
            .set("active", true)
            .set("displayOrder", self.display_order)
            .server_timestamp("createdAt")
            .set("updatedAt", Value::Null)
    }
}

use crate::store::{Document, Fields, Value};

#[derive(Debug, Clone)]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// The stored `classesPerMonth`, as written. `None` when the field is absent.
    pub classes_per_month: Option<Value>,
}

impl Plan {
    pub fn from_document(doc: Document) -> Self {
        Self {
            name: doc.string_field("name").unwrap_or_default(),
            classes_per_month: doc.get("classesPerMonth").cloned(),
            id: doc.id,
        }
    }

    /// The monthly allowance to copy onto members. Absent or null means unlimited.
    pub fn allowance(&self) -> Option<&Value> {
        self.classes_per_month.as_ref().filter(|v| **v != Value::Null)
    }
}

/// A plan as written by the catalog seed.
#[derive(Debug, Clone, Copy)]
pub struct NewPlan {
    pub name: &'static str,
    pub price: i64,
    pub duration_days: i64,
    pub description: &'static str,
    pub classes_per_month: Option<i64>,
    pub display_order: i64,
}

impl NewPlan {
    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .set("name", self.name)
            .set("price", self.price)
            .set("durationDays", self.duration_days)
            .set("description", self.description)
            .set("classesPerMonth", self.classes_per_month)
            .set("active", true)
            .set("displayOrder", self.display_order)
            .server_timestamp("createdAt")
            .set("updatedAt", Value::Null)
    }
}

pub fn describe_allowance(classes_per_month: Option<i64>) -> String {
    match classes_per_month {
        Some(n) => format!("{} classes/month", n),
        None => "unlimited".to_string(),
    }
}

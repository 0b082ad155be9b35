use std::collections::BTreeMap;

use crate::store::{Document, Fields, Value};

pub const CLASSES_PER_MONTH: &str = "classesPerMonth";
/// Superseded by [`CLASSES_PER_MONTH`].
pub const LEGACY_CLASS_LIMIT: &str = "classLimit";
/// Allowance given to users migrated off the legacy field (the "Plan Iniciado" allowance).
pub const DEFAULT_CLASSES_PER_MONTH: i64 = 4;
pub const ACTIVE_MEMBERSHIP: &str = "active";

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub fields: BTreeMap<String, Value>,
}

impl User {
    pub fn from_document(doc: Document) -> Self {
        Self {
            email: doc.string_field("email"),
            id: doc.id,
            fields: doc.fields,
        }
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("no email")
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn allowance_fix(&self) -> AllowanceFix {
        match (self.field(LEGACY_CLASS_LIMIT), self.field(CLASSES_PER_MONTH)) {
            (Some(legacy), None) => AllowanceFix::Migrate {
                legacy: legacy.clone(),
            },
            (Some(legacy), Some(current)) => AllowanceFix::DropLegacy {
                legacy: legacy.clone(),
                current: current.clone(),
            },
            _ => AllowanceFix::Keep,
        }
    }
}

/// What the `classLimit` → `classesPerMonth` backfill does to one user.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowanceFix {
    /// Only the legacy field is present.
    Migrate { legacy: Value },
    /// Both fields are present; the current one wins.
    DropLegacy { legacy: Value, current: Value },
    Keep,
}

impl AllowanceFix {
    pub fn update(&self) -> Option<Fields> {
        match self {
            AllowanceFix::Migrate { .. } => Some(
                Fields::new()
                    .set(CLASSES_PER_MONTH, DEFAULT_CLASSES_PER_MONTH)
                    .delete(LEGACY_CLASS_LIMIT),
            ),
            AllowanceFix::DropLegacy { .. } => Some(Fields::new().delete(LEGACY_CLASS_LIMIT)),
            AllowanceFix::Keep => None,
        }
    }
}

use std::collections::BTreeMap;

use crate::store::{Fields, Value};

pub const APP_SETTINGS: &str = "app_settings";
pub const PAYMENT_SETTINGS: &str = "payment_settings";
pub const FEATURE_FLAGS: &str = "feature_flags";
pub const BUSINESS_INFO: &str = "business_info";

/// A fixed `config/*` document together with the values worth echoing back.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    pub id: &'static str,
    pub fields: Fields,
    pub highlights: Vec<(&'static str, String)>,
}

pub fn app_settings() -> ConfigDocument {
    ConfigDocument {
        id: APP_SETTINGS,
        fields: Fields::new()
            .set("maintenance_mode", false)
            .set("min_app_version", "1.0.0")
            .set("force_update", false)
            .set("support_email", "soporte@ayutthayacamp.com")
            .set("support_phone", "+506-1234-5678")
            .set("default_class_capacity", 15i64)
            .set("max_advance_booking_days", 7i64)
            .server_timestamp("updatedAt"),
        highlights: vec![
            ("maintenance_mode", "false".to_string()),
            ("default_class_capacity", "15".to_string()),
            ("max_advance_booking_days", "7".to_string()),
        ],
    }
}

pub fn payment_settings() -> ConfigDocument {
    let methods = ["sinpe", "transferencia", "efectivo"];
    ConfigDocument {
        id: PAYMENT_SETTINGS,
        fields: Fields::new()
            .set("enrollment_price", 30000i64)
            .set("currency", "CRC")
            .set("currency_symbol", "₡")
            .set("payment_methods", methods.to_vec())
            .set("require_receipt", true)
            .set("auto_approve_enabled", false)
            .server_timestamp("updatedAt"),
        highlights: vec![
            ("enrollment_price", "₡30000".to_string()),
            ("payment_methods", methods.join(", ")),
            ("auto_approve_enabled", "false".to_string()),
        ],
    }
}

pub fn feature_flags() -> ConfigDocument {
    ConfigDocument {
        id: FEATURE_FLAGS,
        fields: Fields::new()
            .set("booking_enabled", true)
            .set("payments_enabled", true)
            .set("qr_checkin_enabled", true)
            .set("chat_support_enabled", false)
            .set("push_notifications_enabled", true)
            .set("admin_reports_enabled", true)
            .server_timestamp("updatedAt"),
        highlights: vec![
            ("booking_enabled", "true".to_string()),
            ("payments_enabled", "true".to_string()),
            ("qr_checkin_enabled", "true".to_string()),
            ("chat_support_enabled", "false".to_string()),
        ],
    }
}

pub fn business_info() -> ConfigDocument {
    let social_media: BTreeMap<String, Value> = [
        ("facebook", "https://facebook.com/ayutthayacamp"),
        ("instagram", "https://instagram.com/ayutthayacamp"),
        ("whatsapp", "+506-1234-5678"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Value::from(v)))
    .collect();

    let gym_name = "Ayutthaya Camp";
    let address = "San José, Costa Rica";
    let schedule = "Lun-Vie: 7am-10pm, Sáb: 9am-2pm";

    ConfigDocument {
        id: BUSINESS_INFO,
        fields: Fields::new()
            .set("gym_name", gym_name)
            .set("address", address)
            .set("schedule", schedule)
            .set(
                "about",
                "Gimnasio especializado en Muay Thai y Boxing. Ofrecemos clases para todos los niveles con instructores certificados.",
            )
            .set("social_media", social_media)
            .server_timestamp("updatedAt"),
        highlights: vec![
            ("gym_name", gym_name.to_string()),
            ("address", address.to_string()),
            ("schedule", schedule.to_string()),
        ],
    }
}

/// All configuration documents, in the order they are written.
pub fn all() -> Vec<ConfigDocument> {
    vec![app_settings(), payment_settings(), feature_flags(), business_info()]
}

use crate::modules::plans::model::NewPlan;

pub const CATALOG: &[NewPlan] = &[
    NewPlan {
        name: "Plan Novato",
        price: 10000,
        duration_days: 30,
        description: "1 clase mensual - Ideal para probar",
        classes_per_month: Some(1),
        display_order: 1,
    },
    NewPlan {
        name: "Plan Iniciado",
        price: 35000,
        duration_days: 30,
        description: "4 clases mensuales - Para empezar tu entrenamiento",
        classes_per_month: Some(4),
        display_order: 2,
    },
    NewPlan {
        name: "Plan Guerrero",
        price: 45000,
        duration_days: 30,
        description: "8 clases mensuales - Entrena de forma regular",
        classes_per_month: Some(8),
        display_order: 3,
    },
    NewPlan {
        name: "Plan Nak Muay",
        price: 55000,
        duration_days: 30,
        description: "12 clases mensuales - Mejora tu técnica",
        classes_per_month: Some(12),
        display_order: 4,
    },
    NewPlan {
        name: "Plan Peleador",
        price: 65000,
        duration_days: 30,
        description: "Clases ilimitadas - Entrena todos los días",
        classes_per_month: None,
        display_order: 5,
    },
];

/// Monthly class allowance by plan name; `None` is unlimited.
pub const CLASS_ALLOWANCES: &[(&str, Option<i64>)] = &[
    ("Plan Novato", Some(1)),
    ("Plan Iniciado", Some(4)),
    ("Plan Guerrero", Some(8)),
    ("Plan Nak Muay", Some(12)),
    ("Plan Peleador", None),
];

/// `None` when the plan name is not in the table.
pub fn allowance_for(plan_name: &str) -> Option<Option<i64>> {
    CLASS_ALLOWANCES
        .iter()
        .find(|(name, _)| *name == plan_name)
        .map(|(_, allowance)| *allowance)
}

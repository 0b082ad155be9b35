use crate::modules::schedules::model::{NewSchedule, ReplacementSchedule};

const HEAD_COACH: &str = "Francisco Poveda";
const ASSISTANT_COACH: &str = "Carlos Mendoza";
const MUAY_THAI: &str = "Muay Thai";
const BOXING: &str = "Boxing";

const WEEKDAYS: &[u32] = &[1, 2, 3, 4, 5];
const MON_WED_FRI: &[u32] = &[1, 3, 5];
const TUE_THU: &[u32] = &[2, 4];
const SATURDAY: &[u32] = &[6];

/// The schedule set `recreate_schedules` installs, in display order.
pub const REPLACEMENTS: &[ReplacementSchedule] = &[
    ReplacementSchedule {
        id: "LMXJV07",
        time: "07:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: WEEKDAYS,
        duration_minutes: 60,
    },
    ReplacementSchedule {
        id: "LMXJV08",
        time: "08:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: WEEKDAYS,
        duration_minutes: 90,
    },
    ReplacementSchedule {
        id: "LMXJV11",
        time: "11:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: WEEKDAYS,
        duration_minutes: 90,
    },
    ReplacementSchedule {
        id: "LXV1830",
        time: "18:30",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: MON_WED_FRI,
        duration_minutes: 90,
    },
    ReplacementSchedule {
        id: "LXV20",
        time: "20:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: MON_WED_FRI,
        duration_minutes: 90,
    },
    ReplacementSchedule {
        id: "MJ18",
        time: "18:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: TUE_THU,
        duration_minutes: 90,
    },
    ReplacementSchedule {
        id: "MJ1930",
        time: "19:30",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: TUE_THU,
        duration_minutes: 90,
    },
    ReplacementSchedule {
        id: "S11",
        time: "11:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: SATURDAY,
        duration_minutes: 120,
    },
    ReplacementSchedule {
        id: "S13",
        time: "13:00",
        class_type: MUAY_THAI,
        instructor: HEAD_COACH,
        capacity: 15,
        days: SATURDAY,
        duration_minutes: 120,
    },
];

/// The schedules of the first catalog seed.
pub const INITIAL: &[NewSchedule] = &[
    NewSchedule { time: "07:00", instructor: HEAD_COACH, class_type: MUAY_THAI, capacity: 15, days: MON_WED_FRI, display_order: 1 },
    NewSchedule { time: "08:00", instructor: HEAD_COACH, class_type: BOXING, capacity: 15, days: MON_WED_FRI, display_order: 2 },
    NewSchedule { time: "09:30", instructor: ASSISTANT_COACH, class_type: MUAY_THAI, capacity: 15, days: MON_WED_FRI, display_order: 3 },
    NewSchedule { time: "18:00", instructor: HEAD_COACH, class_type: MUAY_THAI, capacity: 15, days: MON_WED_FRI, display_order: 4 },
    NewSchedule { time: "20:00", instructor: ASSISTANT_COACH, class_type: BOXING, capacity: 15, days: MON_WED_FRI, display_order: 5 },
    NewSchedule { time: "07:00", instructor: HEAD_COACH, class_type: MUAY_THAI, capacity: 15, days: TUE_THU, display_order: 6 },
    NewSchedule { time: "08:00", instructor: HEAD_COACH, class_type: BOXING, capacity: 15, days: TUE_THU, display_order: 7 },
    NewSchedule { time: "09:30", instructor: ASSISTANT_COACH, class_type: MUAY_THAI, capacity: 15, days: TUE_THU, display_order: 8 },
    NewSchedule { time: "18:30", instructor: HEAD_COACH, class_type: MUAY_THAI, capacity: 15, days: TUE_THU, display_order: 9 },
    NewSchedule { time: "20:00", instructor: ASSISTANT_COACH, class_type: BOXING, capacity: 15, days: TUE_THU, display_order: 10 },
    NewSchedule { time: "11:00", instructor: HEAD_COACH, class_type: MUAY_THAI, capacity: 20, days: SATURDAY, display_order: 11 },
    NewSchedule { time: "13:00", instructor: ASSISTANT_COACH, class_type: MUAY_THAI, capacity: 20, days: SATURDAY, display_order: 12 },
];

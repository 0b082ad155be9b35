//! Old → new schedule ID table used when the schedule collection is replaced.
//!
//! Schedules are matched by class time. When several old documents share a
//! time, the one seen last claims it; when several replacements share a
//! time, the last replacement wins the old ID. The table therefore holds at
//! most one old ID per time and exactly one new ID per old ID.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapEntry {
    pub old_id: String,
    pub new_id: String,
    pub time: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleRemap {
    entries: BTreeMap<String, RemapEntry>,
}

impl ScheduleRemap {
    /// `old` and `replacements` are `(id, time)` pairs in store/list order.
    pub fn build<'a, O, R>(old: O, replacements: R) -> Self
    where
        O: IntoIterator<Item = (&'a str, &'a str)>,
        R: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let old_by_time: HashMap<&str, &str> =
            old.into_iter().map(|(id, time)| (time, id)).collect();

        let mut entries = BTreeMap::new();
        for (new_id, time) in replacements {
            if let Some(old_id) = old_by_time.get(time) {
                entries.insert(
                    old_id.to_string(),
                    RemapEntry {
                        old_id: old_id.to_string(),
                        new_id: new_id.to_string(),
                        time: time.to_string(),
                    },
                );
            }
        }

        Self { entries }
    }

    pub fn new_id(&self, old_id: &str) -> Option<&str> {
        self.entries.get(old_id).map(|e| e.new_id.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = &RemapEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

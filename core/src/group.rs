// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use jiff::civil;

use crate::types::MeetingOccurrence;

/// The identity of a weekly time slot shared by one course.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Course code
    pub title: String,
    /// Start time of day
    pub start: civil::Time,
    /// End time of day
    pub end: civil::Time,
}

impl SlotKey {
    fn of(occurrence: &MeetingOccurrence) -> Self {
        Self {
            title: occurrence.title.clone(),
            start: occurrence.start,
            end: occurrence.end,
        }
    }
}

/// Meetings that share a slot and recur together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceGroup {
    /// The shared slot
    pub key: SlotKey,
    /// Members in input order, never empty
    pub members: Vec<MeetingOccurrence>,
}

impl RecurrenceGroup {
    /// Distinct member weekdays, Sunday first.
    pub fn weekdays(&self) -> Vec<civil::Weekday> {
        let mut days: Vec<_> = self.members.iter().map(|a| a.weekday).collect();
        days.sort_by_key(|a| a.to_sunday_zero_offset());
        days.dedup();
        days
    }

    /// The member that describes the group's kind and location.
    pub fn sample(&self) -> Option<&MeetingOccurrence> {
        self.members.first()
    }
}

/// Partition meetings into groups by slot.
///
/// Groups are returned in the order their slot first appears.
pub fn group_by_slot(occurrences: &[MeetingOccurrence]) -> Vec<RecurrenceGroup> {
    let mut index: HashMap<SlotKey, usize> = HashMap::new();
    let mut groups: Vec<RecurrenceGroup> = Vec::new();
    for occurrence in occurrences {
        let key = SlotKey::of(occurrence);
        match index.get(&key) {
            Some(&i) => groups[i].members.push(occurrence.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(RecurrenceGroup {
                    key,
                    members: vec![occurrence.clone()],
                });
            }
        }
    }
    groups
}

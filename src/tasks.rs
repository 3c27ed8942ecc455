use serde::{Deserialize, Serialize};

use crate::cell::Department;
use crate::coords::GridPos;

/// Payloads at or above this weight are never accepted.
pub const MAX_PAYLOAD_KG: f32 = 15.0;

/// Real kilogram value for a submission weight class (1-6).
pub fn weight_class_kg(class: u8) -> Option<f32> {
    match class {
        1 => Some(0.4),
        2 => Some(1.5),
        3 => Some(3.5),
        4 => Some(10.0),
        5 => Some(30.0),
        6 => Some(60.0),
        _ => None,
    }
}

/// A medical-supply delivery request. The destination anchor is resolved
/// once, at submission time, against the floor plan's department table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub item: String,
    pub destination: Department,
    pub anchor: GridPos,
    pub urgency: u8,
    pub ctas: u8,
    pub weight_kg: f32,
    pub created_at: f64,
}

impl Task {
    /// Lower score dispatches first. CTAS dominates, urgency subtracts,
    /// accumulated wait minutes add.
    pub fn priority_score(&self, now: f64) -> f64 {
        let wait_minutes = (now - self.created_at).max(0.0) / 60.0;
        self.ctas as f64 * 100.0 + wait_minutes - self.urgency as f64 * 5.0
    }

    pub fn description(&self) -> String {
        format!(
            "#{} {} -> {} (CTAS {}, urgency {}, {:.1} kg)",
            self.id,
            self.item,
            self.destination.label(),
            self.ctas,
            self.urgency,
            self.weight_kg
        )
    }
}

/// Pending tasks in dispatch order. The order is only meaningful right
/// after `reorder`; the dispatcher recomputes it before every assignment
/// pass because scores drift with wait time.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Every CTAS-1 task goes strictly ahead of every non-CTAS-1 task, FIFO
    /// among themselves. The rest order by score, stable so equal scores
    /// keep submission order.
    pub fn reorder(&mut self, now: f64) {
        self.tasks.sort_by(|a, b| {
            use std::cmp::Ordering;
            match (a.ctas == 1, b.ctas == 1) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => a.priority_score(now).total_cmp(&b.priority_score(now)),
            }
        });
    }

    /// Removes and returns the head of the queue. Pop-and-assign is the one
    /// contended step of a tick; it removes each task exactly once.
    pub fn pop_front(&mut self) -> Option<Task> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.tasks.remove(0))
        }
    }
}

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::cell::Department;
use crate::coords::GridPos;
use crate::drones::{Drone, DroneStatus, LOW_BATTERY, Payload};
use crate::events::EventLog;
use crate::floor_plan::FloorPlan;
use crate::path::find_path;
use crate::tasks::{MAX_PAYLOAD_KG, Task, TaskQueue, weight_class_kg};

/// Battery percent restored per tick while charging at the hub.
pub const CHARGE_PER_TICK: f32 = 2.0;

/// Logical seconds that one tick represents; wait-time scores advance by
/// this much per tick.
pub const TICK_SECONDS: f64 = 1.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("urgency {0} outside 1-5")]
    UrgencyOutOfRange(u8),
    #[error("CTAS level {0} outside 1-5")]
    CtasOutOfRange(u8),
    #[error("unknown weight class {0}")]
    UnknownWeightClass(u8),
    #[error("payload of {weight_kg} kg exceeds the 15 kg carry limit")]
    PayloadTooHeavy { weight_kg: f32 },
    #[error("no anchor for department {0}")]
    UnknownDepartment(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct DroneSnapshot {
    pub id: u32,
    pub position: GridPos,
    pub battery: f32,
    pub status: DroneStatus,
    pub remaining_path: Vec<GridPos>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskSnapshot {
    pub id: u64,
    pub item: String,
    pub destination: Department,
    pub urgency: u8,
    pub ctas: u8,
    pub weight_kg: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimSnapshot {
    pub drones: Vec<DroneSnapshot>,
    pub pending_tasks: Vec<TaskSnapshot>,
}

/// The whole simulation state: floor plan, fleet, pending tasks, event log
/// and the logical clock. Callers submit tasks, tick, and read snapshots;
/// nothing lives outside this value.
#[derive(Debug)]
pub struct Engine {
    pub floor_plan: FloorPlan,
    pub fleet: Vec<Drone>,
    pub queue: TaskQueue,
    pub events: EventLog,
    now: f64,
    next_task_id: u64,
}

impl Engine {
    pub fn new(floor_plan: FloorPlan, fleet: Vec<Drone>) -> Self {
        Self {
            floor_plan,
            fleet,
            queue: TaskQueue::new(),
            events: EventLog::new(),
            now: 0.0,
            next_task_id: 1,
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Validates and enqueues a delivery request. The destination anchor is
    /// resolved here, once; overweight classes are refused up front so no
    /// undeliverable task ever sits in the queue.
    pub fn submit_task(
        &mut self,
        item: impl Into<String>,
        destination: Department,
        urgency: u8,
        ctas: u8,
        weight_class: u8,
        timestamp: f64,
    ) -> Result<u64, SubmitError> {
        if !(1..=5).contains(&urgency) {
            return Err(SubmitError::UrgencyOutOfRange(urgency));
        }
        if !(1..=5).contains(&ctas) {
            return Err(SubmitError::CtasOutOfRange(ctas));
        }
        let weight_kg =
            weight_class_kg(weight_class).ok_or(SubmitError::UnknownWeightClass(weight_class))?;
        if weight_kg >= MAX_PAYLOAD_KG {
            return Err(SubmitError::PayloadTooHeavy { weight_kg });
        }
        let anchor = self
            .floor_plan
            .anchor(destination)
            .ok_or(SubmitError::UnknownDepartment(destination.label()))?;

        // The clock never runs backwards, whatever timestamps callers send.
        self.now = self.now.max(timestamp);
        let id = self.next_task_id;
        self.next_task_id += 1;
        let task = Task {
            id,
            item: item.into(),
            destination,
            anchor,
            urgency,
            ctas,
            weight_kg,
            created_at: timestamp,
        };
        info!(task = id, destination = destination.label(), ctas, "task queued");
        self.queue.push(task);
        Ok(id)
    }

    /// One discrete simulation step: reorder the queue, hand tasks to idle
    /// drones, move every in-flight drone one cell, then apply lifecycle
    /// transitions for drones with no path left. Returns whether any drone
    /// moved, so callers know to keep ticking.
    pub fn tick(&mut self) -> bool {
        self.now += TICK_SECONDS;
        self.queue.reorder(self.now);
        self.assign_tasks();
        let any_moving = self.advance_drones();
        self.apply_transitions();
        any_moving
    }

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            drones: self
                .fleet
                .iter()
                .map(|d| DroneSnapshot {
                    id: d.id,
                    position: d.pos,
                    battery: d.battery,
                    status: d.status,
                    remaining_path: d.path.iter().copied().collect(),
                })
                .collect(),
            pending_tasks: self
                .queue
                .iter()
                .map(|t| TaskSnapshot {
                    id: t.id,
                    item: t.item.clone(),
                    destination: t.destination,
                    urgency: t.urgency,
                    ctas: t.ctas,
                    weight_kg: t.weight_kg,
                })
                .collect(),
        }
    }

    fn assign_tasks(&mut self) {
        for i in 0..self.fleet.len() {
            if self.queue.is_empty() {
                break;
            }
            let eligible = self.fleet[i].status == DroneStatus::Idle
                && self.fleet[i].battery > LOW_BATTERY;
            if !eligible {
                continue;
            }
            // A dropped task (no route) leaves the drone free for the next
            // one in line.
            while let Some(task) = self.queue.pop_front() {
                if self.try_assign(i, task) {
                    break;
                }
            }
        }
    }

    /// Two-leg route: back to the hub for pickup (skipped when already on a
    /// hub cell), then hub to the destination anchor. Popping the task and
    /// handing it to the drone happen together; no task reaches two drones.
    fn try_assign(&mut self, idx: usize, task: Task) -> bool {
        let hub = self.floor_plan.hub_anchor();
        let pos = self.fleet[idx].pos;
        let pickup_leg = if self.floor_plan.is_hub_cell(pos) {
            Vec::new()
        } else {
            find_path(&self.floor_plan, pos, hub)
        };
        let pickup_end = pickup_leg.last().copied().unwrap_or(pos);
        let delivery_leg = find_path(&self.floor_plan, pickup_end, task.anchor);
        if delivery_leg.is_empty() && pickup_end != task.anchor {
            // The grid never changes, so an unreachable anchor stays
            // unreachable; drop the task rather than requeue it forever.
            warn!(
                task = task.id,
                destination = task.destination.label(),
                "no route to destination, task dropped"
            );
            self.events.push(format!(
                "Path failed for {} - task #{} dropped",
                task.destination.label(),
                task.id
            ));
            return false;
        }

        let drone = &mut self.fleet[idx];
        if let Err(err) = drone.load(Payload::new(task.item.clone(), task.weight_kg)) {
            // Submission validation keeps overweight tasks out of the
            // queue, but a refused load must not take the drone down.
            warn!(task = task.id, drone = drone.id, %err, "load refused, task dropped");
            self.events
                .push(format!("D{} refused task #{}: {}", drone.id, task.id, err));
            return false;
        }
        drone.path = pickup_leg.into_iter().chain(delivery_leg).collect();
        drone.status = DroneStatus::Delivering;
        info!(drone = drone.id, task = task.id, "dispatched");
        self.events.push(format!(
            "D{} dispatched -> {} ({})",
            drone.id,
            task.destination.label(),
            task.item
        ));
        true
    }

    fn advance_drones(&mut self) -> bool {
        let mut any_moving = false;
        for drone in &mut self.fleet {
            if !drone.has_path() {
                continue;
            }
            if drone.battery > 0.0 {
                drone.step(&self.floor_plan);
                any_moving = true;
            }
            if drone.battery <= 0.0 && drone.has_path() {
                drone.path.clear();
                drone.status = DroneStatus::Stranded;
                warn!(drone = drone.id, "battery exhausted with waypoints left");
                self.events.push(format!(
                    "D{} stranded at ({}, {}) - battery exhausted",
                    drone.id, drone.pos.row, drone.pos.col
                ));
            }
        }
        any_moving
    }

    fn apply_transitions(&mut self) {
        let hub = self.floor_plan.hub_anchor();
        for i in 0..self.fleet.len() {
            if self.fleet[i].has_path() {
                continue;
            }
            match self.fleet[i].status {
                DroneStatus::Delivering => {
                    let drone = &mut self.fleet[i];
                    let item = drone
                        .unload()
                        .map(|p| p.item)
                        .unwrap_or_else(|| "payload".to_string());
                    drone.status = DroneStatus::Idle;
                    info!(drone = drone.id, "arrived at destination");
                    self.events.push(format!(
                        "D{} arrived at destination, delivered {}",
                        drone.id, item
                    ));
                }
                DroneStatus::Returning => {
                    let drone = &mut self.fleet[i];
                    drone.status = DroneStatus::Idle;
                    self.events.push(format!("D{} returned to base", drone.id));
                }
                DroneStatus::Idle | DroneStatus::Charging => {
                    let at_hub = self.floor_plan.is_hub_cell(self.fleet[i].pos);
                    if at_hub && self.fleet[i].battery < 100.0 {
                        let drone = &mut self.fleet[i];
                        drone.status = DroneStatus::Charging;
                        drone.battery = (drone.battery + CHARGE_PER_TICK).min(100.0);
                    } else if at_hub {
                        let drone = &mut self.fleet[i];
                        if drone.status == DroneStatus::Charging {
                            drone.status = DroneStatus::Idle;
                            self.events.push(format!("D{} fully recharged", drone.id));
                        }
                    } else if self.fleet[i].battery < LOW_BATTERY {
                        let path = find_path(&self.floor_plan, self.fleet[i].pos, hub);
                        let drone = &mut self.fleet[i];
                        drone.path = path.into_iter().collect();
                        drone.status = DroneStatus::Returning;
                        info!(drone = drone.id, battery = drone.battery, "low battery return");
                        self.events.push(format!(
                            "D{} battery low (<30%), returning to hub",
                            drone.id
                        ));
                    }
                }
                DroneStatus::Stranded => {}
            }
        }
    }
}

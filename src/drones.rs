use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::GridPos;
use crate::floor_plan::FloorPlan;

/// Battery percent drained per cell moved, before the payload multiplier.
pub const STEP_DRAIN: f32 = 0.5;

/// Dispatch requires strictly more than this battery percent; below it an
/// idle drone away from the hub flies home.
pub const LOW_BATTERY: f32 = 30.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayloadError {
	#[error("payload of {weight_kg} kg exceeds the 15 kg carry limit")]
	TooHeavy { weight_kg: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
	pub item: String,
	pub weight_kg: f32,
}

impl Payload {
	pub fn new(item: impl Into<String>, weight_kg: f32) -> Self {
		Self { item: item.into(), weight_kg }
	}
}

/// Battery drain multiplier for a payload weight. Heavier loads drain
/// faster; 15 kg and above cannot be carried at all.
pub fn drain_multiplier(weight_kg: f32) -> Option<f32> {
	if weight_kg < 0.5 {
		Some(1.0)
	} else if weight_kg < 2.0 {
		Some(1.2)
	} else if weight_kg < 5.0 {
		Some(1.5)
	} else if weight_kg < 15.0 {
		Some(2.0)
	} else {
		None
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneStatus {
	Idle,
	Charging,
	Delivering,
	Returning,
	Stranded,
}

impl DroneStatus {
	pub fn label(self) -> &'static str {
		match self {
			DroneStatus::Idle => "Idle",
			DroneStatus::Charging => "Charging",
			DroneStatus::Delivering => "Delivering",
			DroneStatus::Returning => "Returning",
			DroneStatus::Stranded => "Stranded",
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
	pub id: u32,
	pub pos: GridPos,
	pub battery: f32,
	pub payload: Option<Payload>,
	multiplier: f32,
	pub status: DroneStatus,
	pub path: VecDeque<GridPos>,
}

impl Drone {
	pub fn new(id: u32, pos: GridPos) -> Self {
		Self {
			id,
			pos,
			battery: 100.0,
			payload: None,
			multiplier: 1.0,
			status: DroneStatus::Idle,
			path: VecDeque::new(),
		}
	}

	pub fn multiplier(&self) -> f32 {
		self.multiplier
	}

	pub fn has_path(&self) -> bool {
		!self.path.is_empty()
	}

	/// Stores the payload and its drain multiplier. Overweight payloads are
	/// refused with no state change.
	pub fn load(&mut self, payload: Payload) -> Result<(), PayloadError> {
		let mult = drain_multiplier(payload.weight_kg).ok_or(PayloadError::TooHeavy {
			weight_kg: payload.weight_kg,
		})?;
		self.multiplier = mult;
		self.payload = Some(payload);
		Ok(())
	}

	/// Clears the payload and resets the drain multiplier. Only called once
	/// the assigned path is fully consumed.
	pub fn unload(&mut self) -> Option<Payload> {
		self.multiplier = 1.0;
		self.payload.take()
	}

	/// Consumes the next waypoint and moves onto it if it is a walkable
	/// cell, draining battery for the move. A waypoint outside the grid or
	/// on a wall is dropped with no movement and no drain; pathfinding
	/// never emits one, but a bad waypoint must not push the drone off-grid.
	pub fn step(&mut self, plan: &FloorPlan) -> bool {
		let Some(next) = self.path.pop_front() else {
			return false;
		};
		if !plan.is_walkable(next) {
			return false;
		}
		self.pos = next;
		self.battery = (self.battery - STEP_DRAIN * self.multiplier).max(0.0);
		true
	}
}

use crate::drones::{Drone, DroneStatus};
use crate::engine::Engine;
use crate::tasks::TaskQueue;

pub fn format_status_line(engine: &Engine) -> String {
	let airborne = engine
		.fleet
		.iter()
		.filter(|d| matches!(d.status, DroneStatus::Delivering | DroneStatus::Returning))
		.count();
	let charging = engine
		.fleet
		.iter()
		.filter(|d| d.status == DroneStatus::Charging)
		.count();
	format!(
		"Pending: {} | Airborne: {} | Charging: {}",
		engine.queue.len(),
		airborne,
		charging
	)
}

pub fn format_fleet_panel(fleet: &[Drone]) -> Vec<String> {
	let mut out = Vec::new();
	out.push("[Drones]".to_string());
	for d in fleet {
		let carrying = d
			.payload
			.as_ref()
			.map(|p| p.item.as_str())
			.unwrap_or("nothing");
		out.push(format!(
			"D{} – {} – ({}, {}) – {:.1}% – carrying {}",
			d.id,
			d.status.label(),
			d.pos.row,
			d.pos.col,
			d.battery,
			carrying
		));
	}
	out
}

pub fn format_queue_panel(queue: &TaskQueue) -> Vec<String> {
	let mut out = Vec::new();
	out.push("[Tasks]".to_string());
	for t in queue.iter() {
		out.push(t.description());
	}
	out
}

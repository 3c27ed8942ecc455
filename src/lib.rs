pub mod cell;
pub mod coords;
pub mod drones;
pub mod engine;
pub mod events;
pub mod floor_plan;
pub mod panel;
pub mod path;
pub mod tasks;

// Re-exports for convenience in tests and integration users.
pub use cell::{CellKind, Department};
pub use coords::{GridPos, RoomRect};
pub use drones::{Drone, DroneStatus, Payload, PayloadError, drain_multiplier};
pub use engine::{Engine, SimSnapshot, SubmitError};
pub use events::EventLog;
pub use floor_plan::FloorPlan;
pub use panel::{format_fleet_panel, format_queue_panel, format_status_line};
pub use path::find_path;
pub use tasks::{MAX_PAYLOAD_KG, Task, TaskQueue, weight_class_kg};

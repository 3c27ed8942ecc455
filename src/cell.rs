use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
	Maternity,
	Icu,
	WaitingRoom,
	Er,
	OperatingRoom,
}

impl Department {
	pub const ALL: [Department; 5] = [
		Department::Maternity,
		Department::Icu,
		Department::WaitingRoom,
		Department::Er,
		Department::OperatingRoom,
	];

	pub fn label(self) -> &'static str {
		match self {
			Department::Maternity => "Maternity",
			Department::Icu => "ICU",
			Department::WaitingRoom => "Waiting Room",
			Department::Er => "ER",
			Department::OperatingRoom => "OR",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Department::ALL.into_iter().find(|d| d.label() == name)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
	Hallway,
	Wall,
	Hub,
	Department(Department),
}

impl CellKind {
	pub fn is_walkable(self) -> bool {
		!matches!(self, CellKind::Wall)
	}

	pub fn is_hub(self) -> bool {
		matches!(self, CellKind::Hub)
	}
}

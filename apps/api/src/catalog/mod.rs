//! Vehicle Catalog: the static fleet shared read-only by every feature.
//!
//! Built once at startup from the in-process table in `data.rs`, wrapped in
//! `Arc` inside `AppState`. There is no mutation API.

use std::fmt;

use serde::{Deserialize, Serialize};

mod data;
pub mod handlers;

/// Body style of a rentable vehicle. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Sedan,
    Hatchback,
    #[serde(rename = "SUV")]
    Suv,
    Truck,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::Hatchback => "Hatchback",
            VehicleType::Suv => "SUV",
            VehicleType::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry. `name` is the matching key for recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub seats: u32,
    /// Daily rate in whole baht.
    pub price: u32,
    /// 0.0 – 5.0
    pub rating: f32,
    pub reviews: u32,
    /// Free text shown on the card and fed to the model as context.
    pub use_cases: String,
    pub image: String,
    #[serde(rename = "dataAiHint")]
    pub image_hint: String,
}

/// Immutable, ordered list of vehicles.
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// The Rungroj Carrent fleet, in display order.
    pub fn fleet() -> Self {
        Self::new(data::fleet())
    }

    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vehicles.iter().map(|v| v.name.as_str())
    }

    /// Case-sensitive exact lookup.
    pub fn find(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn of_type(&self, vehicle_type: VehicleType) -> impl Iterator<Item = &Vehicle> {
        self.vehicles
            .iter()
            .filter(move |v| v.vehicle_type == vehicle_type)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}

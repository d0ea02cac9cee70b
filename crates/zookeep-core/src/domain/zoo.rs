//! The `Zoo` aggregate: a named collection of organisms.
//!
//! Pure orchestration over the organisms it holds — the zoo has no behavior
//! of its own beyond asking each inhabitant for its description lines.

use serde::{Deserialize, Serialize};

use crate::domain::organism::{Animal, Organism, Plant};

/// A zoo: name/address pair plus its animal and plant exhibits.
///
/// Every referenced organism is constructed before the zoo is; the fluent
/// `with_*` methods make that ordering explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zoo {
    name: String,
    address: String,
    animals: Vec<Animal>,
    plants: Vec<Plant>,
}

impl Zoo {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            animals: Vec::new(),
            plants: Vec::new(),
        }
    }

    pub fn with_animal(mut self, animal: Animal) -> Self {
        self.animals.push(animal);
        self
    }

    pub fn with_plant(mut self, plant: Plant) -> Self {
        self.plants.push(plant);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn population(&self) -> usize {
        self.animals.len() + self.plants.len()
    }

    /// One sound line per animal, in exhibit order.
    pub fn make_noise(&self) -> Vec<String> {
        self.animals.iter().map(Animal::sound).collect()
    }

    /// One respiration line per plant, in exhibit order.
    pub fn respire(&self) -> Vec<String> {
        self.plants.iter().map(|plant| plant.respire()).collect()
    }
}

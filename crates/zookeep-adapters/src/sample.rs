//! Built-in sample data.
//!
//! This module is the single entry-point for the reference datasets the demo
//! commands and tests run on. The data is constructed fresh on every call
//! and handed to the caller — nothing here is process-wide state, so the
//! pure pipeline stays pure and the caller decides what to inject where.

use zookeep_core::domain::{Animal, AnimalKind, Employee, Plant, Zoo};

/// The five-employee reference roster.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new("John", 50_000),
        Employee::new("Jane", 60_000),
        Employee::new("Jake", 75_000),
        Employee::new("Emily", 90_000),
        Employee::new("Mike", 120_000),
    ]
}

/// The reference name list for the string queries.
pub fn names() -> Vec<String> {
    ["Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Adam"]
        .map(String::from)
        .to_vec()
}

/// The reference number list for the numeric queries.
pub fn numbers() -> Vec<i32> {
    vec![10, 25, 33, 47, 50, 68, 72, 89, 91]
}

/// The demo zoo: two canids and a rose.
pub fn zoo() -> Zoo {
    Zoo::new("Zookeep City Zoo", "1 Menagerie Way")
        .with_animal(Animal::new(AnimalKind::Canidae, "General canidae", 10))
        .with_animal(Animal::new(AnimalKind::Dog, "Greyhound", 4))
        .with_plant(Plant::new("Rose", true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zookeep_core::domain::Organism;

    #[test]
    fn roster_has_five_named_records() {
        let roster = employees();
        assert_eq!(roster.len(), 5);
        assert!(roster.iter().all(|e| !e.name().is_empty()));
    }

    #[test]
    fn zoo_population_matches_exhibits() {
        let zoo = zoo();
        assert_eq!(zoo.population(), 3);
        assert!(zoo.plants()[0].is_alive());
    }

    #[test]
    fn datasets_are_fresh_per_call() {
        // Two calls yield equal but independent values.
        assert_eq!(employees(), employees());
        assert_eq!(names(), names());
        assert_eq!(numbers(), numbers());
    }
}

//! The organism model: the `Organism` capability trait and its two
//! implementing families, `Animal` (kind-tagged) and `Plant`.
//!
//! # Design
//!
//! `Organism` is a capability set, not a class hierarchy. `Animal` carries an
//! [`AnimalKind`] tag and delegates every kind-specific behavior to the
//! override table in `behavior.rs`; `Plant` implements the trait directly.
//! Nothing in this file matches on a concrete kind — register overrides in
//! `behavior.rs` instead.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

// ── Organism ─────────────────────────────────────────────────────────────────

/// Capability contract shared by everything kept in the zoo.
///
/// `respire` returns a species-specific respiration description and must
/// never fail; emitting it (console, log, ...) is the caller's concern.
/// `is_alive` carries an explicit default — animal-like organisms are always
/// alive, variants override as needed.
pub trait Organism {
    /// Describe how this organism respires.
    fn respire(&self) -> String;

    /// Default liveness policy: alive unless a variant says otherwise.
    fn is_alive(&self) -> bool {
        true
    }

    fn species(&self) -> &str;

    fn set_species(&mut self, species: String);

    /// Age in whole years; organisms with no age concept report 0.
    fn age(&self) -> u32;

    /// Apply `age` only when it is non-negative.
    ///
    /// Negative input is tolerated, not rejected: the call becomes a no-op
    /// with a diagnostic. No error crosses this boundary.
    fn set_age(&mut self, age: i32);
}

// ── AnimalKind ───────────────────────────────────────────────────────────────

/// Tag for a concrete animal kind.
///
/// The specialization chain (Dog derives from Canidae) lives in the
/// `behavior.rs` registry, not here. To add a kind: add a variant here, add
/// its `as_str`/`FromStr` arms, then add one `KindDef` entry in
/// `behavior.rs`. Nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Canidae,
    Dog,
}

impl AnimalKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Canidae => "canidae",
            Self::Dog => "dog",
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canidae" | "canid" => Ok(Self::Canidae),
            "dog" => Ok(Self::Dog),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

// ── Animal ───────────────────────────────────────────────────────────────────

/// A kind-tagged animal.
///
/// Fields are private and reached through the [`Organism`] accessors; the
/// age invariant (never negative after construction) holds by type — only
/// `set_age` ever sees signed input, and it validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    kind: AnimalKind,
    species: String,
    age: u32,
}

impl Animal {
    pub fn new(kind: AnimalKind, species: impl Into<String>, age: u32) -> Self {
        Self {
            kind,
            species: species.into(),
            age,
        }
    }

    pub const fn kind(&self) -> AnimalKind {
        self.kind
    }

    /// Describe how this animal moves.
    ///
    /// Resolved through the override table; the base contract does not
    /// supply one, so every registered kind (or an ancestor) must.
    pub fn locomotion(&self) -> String {
        crate::domain::behavior::resolve_locomotion(self.kind)(self)
    }

    /// Describe the sound this animal makes.
    pub fn sound(&self) -> String {
        crate::domain::behavior::resolve_sound(self.kind)(self)
    }
}

impl Organism for Animal {
    /// Most-derived override wins: a Dog pants like a Dog, not like the
    /// Canidae it derives from. See `behavior::resolve_respiration`.
    fn respire(&self) -> String {
        crate::domain::behavior::resolve_respiration(self.kind)(self)
    }

    fn species(&self) -> &str {
        &self.species
    }

    fn set_species(&mut self, species: String) {
        self.species = species;
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn set_age(&mut self, age: i32) {
        match u32::try_from(age) {
            Ok(age) => self.age = age,
            Err(_) => {
                warn!(species = %self.species, age, "age cannot be negative; keeping previous value");
            }
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Species: {}, Age: {}", self.species, self.age)
    }
}

// ── Plant ────────────────────────────────────────────────────────────────────

/// A plant implements [`Organism`] directly — it is not an animal kind.
///
/// Plants have no age concept: `age` is fixed at 0 and the age/species
/// setters are deliberate no-ops (logged at debug so ignored calls stay
/// observable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    species: String,
    flowering: bool,
}

impl Plant {
    pub fn new(species: impl Into<String>, flowering: bool) -> Self {
        Self {
            species: species.into(),
            flowering,
        }
    }

    pub const fn flowering(&self) -> bool {
        self.flowering
    }

    /// Describe this plant's growth.
    pub fn growth(&self) -> String {
        format!("{} is growing.", self.species)
    }
}

impl Organism for Plant {
    fn respire(&self) -> String {
        format!("{} is respiring through photosynthesis.", self.species)
    }

    /// Plant liveness is its flowering state, overriding the default.
    fn is_alive(&self) -> bool {
        self.flowering
    }

    fn species(&self) -> &str {
        &self.species
    }

    fn set_species(&mut self, _species: String) {
        debug!(species = %self.species, "plant species is fixed; ignoring");
    }

    fn age(&self) -> u32 {
        0
    }

    fn set_age(&mut self, age: i32) {
        debug!(species = %self.species, age, "plants have no age; ignoring");
    }
}

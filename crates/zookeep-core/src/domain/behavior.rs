//! Animal behavior registry.
//!
//! # Design Rationale
//!
//! Kind-specific behavior is not scattered across `match` arms in
//! `organism.rs`. Each kind is described exactly once by its [`KindDef`]:
//! which kind it derives from, and which behaviors it overrides. Resolution
//! walks the chain from the most-derived kind toward the base, and the first
//! override found wins — ordinary override shadowing, made explicit as a
//! table lookup instead of implicit method resolution.
//!
//! # Adding a New Kind
//!
//! 1. Add a variant to `AnimalKind` in `organism.rs`
//! 2. Add one [`KindDef`] entry to [`KIND_REGISTRY`]
//! 3. That's it — no other files change
//!
//! A kind with `parent: None` derives straight from the animal base
//! behaviors at the bottom of this file.

use crate::domain::organism::{Animal, AnimalKind, Organism};

/// Behavior function: one animal in, one description line out.
pub type Behavior = fn(&Animal) -> String;

// ── Kind definitions ─────────────────────────────────────────────────────────

/// Describes one animal kind's place in the specialization chain and the
/// behaviors it overrides.
///
/// `None` in an override slot means "inherit": resolution continues at
/// `parent`, then falls back to the base behavior.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    /// The kind this definition describes.
    pub kind: AnimalKind,

    /// The kind this one derives from; `None` derives from the base.
    pub parent: Option<AnimalKind>,

    /// Respiration override.
    pub respiration: Option<Behavior>,

    /// Locomotion override.
    ///
    /// The base supplies no locomotion, so every kind must resolve one
    /// through its chain. `assert_registry_integrity` enforces this.
    pub locomotion: Option<Behavior>,

    /// Sound override.
    pub sound: Option<Behavior>,
}

/// Single source of truth for kind behavior.
///
/// Ordering follows the chains (parents before children) as a convention,
/// but lookup is exhaustive so order is not semantic.
pub static KIND_REGISTRY: &[KindDef] = &[
    KindDef {
        kind: AnimalKind::Canidae,
        parent: None,
        respiration: Some(|_| "Canidae is panting.".to_string()),
        locomotion: Some(|_| "Canidae is moving.".to_string()),
        sound: None,
    },
    KindDef {
        kind: AnimalKind::Dog,
        parent: Some(AnimalKind::Canidae),
        // Shadows the Canidae override; locomotion and sound are inherited.
        respiration: Some(|_| "Dog is panting.".to_string()),
        locomotion: None,
        sound: None,
    },
];

// ── Base behaviors ───────────────────────────────────────────────────────────

/// Respiration shared by every animal that overrides nothing.
fn base_respiration(animal: &Animal) -> String {
    format!("{} is respiring", animal.species())
}

/// Sound shared by every animal that overrides nothing.
fn base_sound(animal: &Animal) -> String {
    format!("{} is making a sound", animal.species())
}

/// Locomotion fallback.
///
/// Reachable only if a kind chain supplies no locomotion override, which
/// `assert_registry_integrity` rules out; kept so resolution stays total.
fn base_locomotion(animal: &Animal) -> String {
    format!("{} is moving", animal.species())
}

// ── Resolution ───────────────────────────────────────────────────────────────

fn def_of(kind: AnimalKind) -> Option<&'static KindDef> {
    KIND_REGISTRY.iter().find(|def| def.kind == kind)
}

/// Walk the chain from `kind` toward the base, returning the first override
/// `pick` finds.
fn resolve(kind: AnimalKind, pick: fn(&KindDef) -> Option<Behavior>) -> Option<Behavior> {
    let mut current = Some(kind);
    while let Some(kind) = current {
        let def = def_of(kind)?;
        if let Some(behavior) = pick(def) {
            return Some(behavior);
        }
        current = def.parent;
    }
    None
}

/// Most-derived respiration override, or the animal base.
pub fn resolve_respiration(kind: AnimalKind) -> Behavior {
    resolve(kind, |def| def.respiration).unwrap_or(base_respiration)
}

/// Most-derived locomotion override, or the (integrity-guarded) fallback.
pub fn resolve_locomotion(kind: AnimalKind) -> Behavior {
    resolve(kind, |def| def.locomotion).unwrap_or(base_locomotion)
}

/// Most-derived sound override, or the animal base.
pub fn resolve_sound(kind: AnimalKind) -> Behavior {
    resolve(kind, |def| def.sound).unwrap_or(base_sound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog() -> Animal {
        Animal::new(AnimalKind::Dog, "Greyhound", 4)
    }

    fn canid() -> Animal {
        Animal::new(AnimalKind::Canidae, "General canidae", 10)
    }

    #[test]
    fn dog_respiration_shadows_canidae() {
        assert_eq!(dog().respire(), "Dog is panting.");
        assert_eq!(canid().respire(), "Canidae is panting.");
    }

    #[test]
    fn dog_inherits_canidae_locomotion() {
        // Dog defines no locomotion; the chain resolves Canidae's.
        assert_eq!(dog().locomotion(), "Canidae is moving.");
        assert_eq!(canid().locomotion(), "Canidae is moving.");
    }

    #[test]
    fn sound_falls_through_to_base() {
        // Neither kind overrides sound; the species-specific base applies.
        assert_eq!(dog().sound(), "Greyhound is making a sound");
        assert_eq!(canid().sound(), "General canidae is making a sound");
    }

    #[test]
    fn respiration_never_fails_and_mentions_a_fixed_description() {
        for def in KIND_REGISTRY {
            let animal = Animal::new(def.kind, "Specimen", 1);
            assert!(!animal.respire().is_empty());
        }
    }

    /// Registry invariants: one entry per kind, acyclic chains that stay
    /// inside the registry, and a resolvable locomotion for every kind.
    #[test]
    fn assert_registry_integrity() {
        for def in KIND_REGISTRY {
            assert_eq!(
                KIND_REGISTRY.iter().filter(|d| d.kind == def.kind).count(),
                1,
                "duplicate registry entry for {}",
                def.kind
            );

            // Chain walk must terminate at a registered base.
            let mut seen = vec![def.kind];
            let mut current = def.parent;
            while let Some(kind) = current {
                assert!(!seen.contains(&kind), "cycle through {}", kind);
                seen.push(kind);
                let parent = def_of(kind).unwrap_or_else(|| panic!("unregistered parent {kind}"));
                current = parent.parent;
            }

            assert!(
                resolve(def.kind, |d| d.locomotion).is_some(),
                "{} resolves no locomotion",
                def.kind
            );
        }
    }
}

//! Exhibit Service - presents a zoo through the reporter port.
//!
//! The domain describes (sound and respiration lines); this service emits.
//! It implements the driving port (incoming) and uses the driven `Reporter`
//! port (outgoing).

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Reporter},
    domain::{Organism, Zoo},
    error::ZookeepResult,
};

/// Orchestrates zoo presentations.
pub struct ExhibitService {
    reporter: Box<dyn Reporter>,
}

impl ExhibitService {
    /// Create a new exhibit service with the given reporter adapter.
    pub fn new(reporter: Box<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// Present the whole zoo: animal sounds, then plant respiration.
    #[instrument(skip_all, fields(zoo = %zoo.name()))]
    pub fn present(&self, zoo: &Zoo) -> ZookeepResult<()> {
        info!(population = zoo.population(), "presenting zoo");
        self.present_sounds(zoo)?;
        self.present_respiration(zoo)
    }

    /// Emit one sound line per animal.
    pub fn present_sounds(&self, zoo: &Zoo) -> ZookeepResult<()> {
        for line in zoo.make_noise() {
            self.emit(&line)?;
        }
        Ok(())
    }

    /// Emit one respiration line per plant.
    pub fn present_respiration(&self, zoo: &Zoo) -> ZookeepResult<()> {
        for line in zoo.respire() {
            self.emit(&line)?;
        }
        Ok(())
    }

    /// Emit each organism's respiration description.
    ///
    /// The descriptions themselves are infallible (the `Organism` contract);
    /// only the reporter can fail here.
    pub fn respire_all(&self, organisms: &[&dyn Organism]) -> ZookeepResult<()> {
        for organism in organisms {
            self.emit(&organism.respire())?;
        }
        Ok(())
    }

    fn emit(&self, line: &str) -> ZookeepResult<()> {
        self.reporter.report(line).map_err(|e| {
            ApplicationError::ReportFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

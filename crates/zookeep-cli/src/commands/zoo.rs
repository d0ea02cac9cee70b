//! `zookeep zoo` — tour the sample exhibits.
//!
//! The full tour presents animal sounds first and plant respiration second.
//! `--sounds` and `--respiration` each narrow the tour to one half;
//! `--respire` instead asks every organism, animal or plant, how it
//! respires.

use tracing::{debug, instrument};

use zookeep_adapters::{sample, ConsoleReporter, MemoryReporter};
use zookeep_core::domain::Organism;
use zookeep_core::error::ZookeepError;
use zookeep_core::prelude::ExhibitService;

use crate::cli::global::OutputFormat;
use crate::cli::ZooArgs;
use crate::error::CliResult;
use crate::output::OutputManager;

/// Execute the `zoo` command.
#[instrument(skip(output))]
pub fn execute(args: &ZooArgs, output: &OutputManager) -> CliResult<()> {
    let zoo = sample::zoo();
    debug!(zoo = zoo.name(), population = zoo.population(), "touring exhibits");

    if output.format() == OutputFormat::Json {
        // Collect the tour in memory, then emit one JSON document.
        let reporter = MemoryReporter::new();
        let service = ExhibitService::new(Box::new(reporter.clone()));
        present(&service, &zoo, args)?;
        let body = serde_json::json!({
            "zoo": zoo.name(),
            "address": zoo.address(),
            "lines": reporter.lines(),
        });
        let rendered =
            serde_json::to_string_pretty(&body).map_err(|e| ZookeepError::Internal {
                message: format!("failed to serialize output: {e}"),
            })?;
        output.print(&rendered)?;
        return Ok(());
    }

    if output.is_quiet() {
        // The tour IS the output; in quiet mode there is nothing to say.
        debug!("quiet mode, skipping tour");
        return Ok(());
    }

    output.header(&format!("{} ({})", zoo.name(), zoo.address()))?;

    let service = ExhibitService::new(Box::new(ConsoleReporter::new()));
    present(&service, &zoo, args)?;
    Ok(())
}

fn present(
    service: &ExhibitService,
    zoo: &zookeep_core::domain::Zoo,
    args: &ZooArgs,
) -> CliResult<()> {
    if args.sounds {
        service.present_sounds(zoo)?;
    } else if args.respiration {
        service.present_respiration(zoo)?;
    } else if args.respire {
        // Animals first, plants after, matching the tour order.
        let organisms: Vec<&dyn Organism> = zoo
            .animals()
            .iter()
            .map(|animal| animal as &dyn Organism)
            .chain(zoo.plants().iter().map(|plant| plant as &dyn Organism))
            .collect();
        service.respire_all(&organisms)?;
    } else {
        service.present(zoo)?;
    }
    Ok(())
}

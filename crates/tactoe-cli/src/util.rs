use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;
use tactoe_evaluator::competitor::Competitor;
use tactoe_training::tournament::TournamentConfig;

use crate::model::competitor_model::CompetitorModel;

/// Writes `value` as pretty JSON to `path`, or to stdout without one.
pub fn write_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let (mut writer, target): (Box<dyn Write>, String) = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            (Box::new(BufWriter::new(file)), path.display().to_string())
        }
        None => (Box::new(io::stdout().lock()), "stdout".to_owned()),
    };
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer).with_context(|| format!("Failed to write newline to {target}"))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {target}"))?;
    Ok(())
}

/// Builds the run's random source.
///
/// Without an explicit seed a fresh one is drawn from the thread RNG; the
/// seed actually used is returned so that the run can be repeated.
pub fn seeded_rng(seed: Option<u64>) -> (Pcg64, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (Pcg64::seed_from_u64(seed), seed)
}

/// Loads a competitor from a model file, or creates a random one.
pub fn load_or_random_competitor<R>(
    model_path: Option<&Path>,
    rng: &mut R,
) -> anyhow::Result<(String, Competitor)>
where
    R: Rng + ?Sized,
{
    let Some(path) = model_path else {
        let competitor = TournamentConfig::default().random_competitor(0, rng);
        return Ok(("random".to_owned(), competitor));
    };
    let model = CompetitorModel::open(path)?;
    let competitor = model
        .to_competitor()
        .with_context(|| format!("Invalid competitor model: {}", path.display()))?;
    Ok((model.name, competitor))
}

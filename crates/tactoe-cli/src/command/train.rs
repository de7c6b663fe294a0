use std::path::PathBuf;

use tactoe_training::tournament::{GenerationReport, Tournament, TournamentConfig};

use crate::{model::competitor_model::CompetitorModel, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of generations to run
    #[arg(long, default_value_t = 100)]
    generations: usize,
    /// Number of competitors in every generation
    #[arg(long, default_value_t = 8)]
    pool_size: usize,
    /// Probability that a child's weight is selected for a ±step mutation
    #[arg(long, default_value_t = 0.25)]
    mutation_rate: f64,
    /// Size of a single mutation step
    #[arg(long, default_value_t = 1.0)]
    mutation_step: f32,
    /// Lower bound of random initial weights
    #[arg(long, default_value_t = -30, allow_negative_numbers = true)]
    min_weight: i32,
    /// Upper bound of random initial weights
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    max_weight: i32,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Name stored in the saved model
    #[arg(long, default_value = "champion")]
    name: String,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = TournamentConfig {
        pool_size: arg.pool_size,
        weight_range: arg.min_weight..=arg.max_weight,
        mutation_rate: arg.mutation_rate,
        mutation_step: arg.mutation_step,
    };
    config.validate()?;
    if arg.generations == 0 || arg.pool_size == 0 {
        anyhow::bail!("Need at least one generation and one competitor to train");
    }

    let (mut rng, seed) = util::seeded_rng(arg.seed);
    eprintln!("Seed: {seed}");
    tracing::info!(seed, ?config, generations = arg.generations, "training started");

    let mut tournament = Tournament::random(config, &mut rng);
    let mut last_report = None;
    for _ in 0..arg.generations {
        let report = tournament.run_generation(&mut rng)?;
        print_report(&report);
        last_report = Some(report);
    }

    let champion = last_report
        .as_ref()
        .and_then(GenerationReport::champion)
        .ok_or_else(|| anyhow::anyhow!("Training produced no competitors"))?;

    eprintln!("Training completed.");

    let model = CompetitorModel::from_competitor(&arg.name, &champion.competitor, champion.wins);
    util::write_json(&model, arg.output.as_deref())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = &arg.output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Generation: {}", model.generation);
    eprintln!("  Wins: {}", model.wins);
    eprintln!("  Weights: {} features", model.weights.len());
    eprintln!("  Lost positions: {}", model.lost_positions.len());

    Ok(())
}

fn print_report(report: &GenerationReport) {
    eprintln!("Generation #{}:", report.generation);

    eprintln!("  Competitors:");
    for (i, standing) in report.standings.iter().enumerate() {
        eprintln!(
            "  {i:2}: {:?} (gen {}) => {} wins",
            standing.competitor.weights().as_array(),
            standing.competitor.generation(),
            standing.wins,
        );
    }
    eprintln!("  Matches: {} ({} drawn)", report.matches, report.draws);

    let Some(stats) = &report.stats else {
        return;
    };
    eprintln!("  Weights Stats:");
    eprintln!(
        "    Min:  {:.2?}",
        stats.weights.iter().map(|s| s.min).collect::<Vec<_>>(),
    );
    eprintln!(
        "    Max:  {:.2?}",
        stats.weights.iter().map(|s| s.max).collect::<Vec<_>>(),
    );
    eprintln!(
        "    Mean: {:.2?}",
        stats.weights.iter().map(|s| s.mean).collect::<Vec<_>>(),
    );

    eprintln!("  Wins Stats:");
    eprintln!("    Min:  {:.0}", stats.wins.min);
    eprintln!("    Max:  {:.0}", stats.wins.max);
    eprintln!("    Mean: {:.2}", stats.wins.mean);
}

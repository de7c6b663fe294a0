//! Round-robin tournament and generational breeding.
//!
//! A [`Tournament`] owns the current population and advances it one
//! generation at a time:
//!
//! 1. **Round-Robin** ([`Tournament::play_round_robin`]) - every unordered pair
//!    plays twice, once with each competitor moving first. The completer of a
//!    line is credited a win on a fresh [`Leaderboard`]; the loser remembers
//!    the board one ply before the winning move.
//! 2. **Ranking** - competitors are sorted by wins, most first. Ties keep
//!    population order; weights never break a tie.
//! 3. **Selection** ([`Tournament::select_breeders`]) - the top half survives.
//! 4. **Breeding** ([`breed`]) - survivors are shuffled and paired
//!    consecutively; each pair produces one child with the averaged, mutated
//!    weights of its parents. An odd survivor out has no partner but still
//!    survives.
//! 5. **Repopulation** - survivors and children form the next population,
//!    topped up with random competitors until it reaches
//!    [`TournamentConfig::pool_size`].
//!
//! Children and fillers are tagged with the new generation number.
//!
//! The loop has no natural end; callers run as many generations as they want
//! via [`Tournament::run_generation`].

use std::ops::RangeInclusive;

use rand::{Rng, seq::SliceRandom as _};
use tactoe_evaluator::competitor::Competitor;

use crate::{
    leaderboard::Leaderboard,
    match_play::{self, MatchError, Seat},
    stats::PopulationStats,
    weights,
};

/// Invalid [`TournamentConfig`] values.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum TournamentConfigError {
    #[display("mutation rate must be within [0, 1], got {rate}")]
    MutationRate { rate: f64 },
    #[display("weight range {start}..={end} is empty")]
    EmptyWeightRange { start: i32, end: i32 },
    #[display("population has {actual} competitors but the pool size is {expected}")]
    PopulationSize { expected: usize, actual: usize },
}

/// Parameters of the genetic loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentConfig {
    /// Number of competitors in every generation.
    pub pool_size: usize,
    /// Range random weights are drawn from.
    pub weight_range: RangeInclusive<i32>,
    /// Probability that a child's weight is selected for mutation.
    ///
    /// A selected weight moves by `-step`, `0` or `+step` with equal
    /// probability, so the effective change rate is two thirds of this value.
    /// `0.0` disables mutation.
    pub mutation_rate: f64,
    /// Size of a single mutation step.
    pub mutation_step: f32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            pool_size: 8,
            weight_range: -30..=30,
            mutation_rate: 0.25,
            mutation_step: 1.0,
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<(), TournamentConfigError> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TournamentConfigError::MutationRate {
                rate: self.mutation_rate,
            });
        }
        if self.weight_range.is_empty() {
            return Err(TournamentConfigError::EmptyWeightRange {
                start: *self.weight_range.start(),
                end: *self.weight_range.end(),
            });
        }
        Ok(())
    }

    /// Creates a competitor with random weights.
    pub fn random_competitor<R>(&self, generation: usize, rng: &mut R) -> Competitor
    where
        R: Rng + ?Sized,
    {
        Competitor::new(weights::random(rng, &self.weight_range), generation)
    }
}

/// A competitor and its wins in one round.
#[derive(Debug, Clone)]
pub struct Standing {
    pub competitor: Competitor,
    pub wins: u32,
}

/// Results of one generation, captured before breeding.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub generation: usize,
    /// The population ranked by wins, most first.
    pub standings: Vec<Standing>,
    pub matches: u32,
    pub draws: u32,
    pub stats: Option<PopulationStats>,
}

impl GenerationReport {
    /// The top-ranked competitor, if the population was not empty.
    #[must_use]
    pub fn champion(&self) -> Option<&Standing> {
        self.standings.first()
    }
}

#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
    generation: usize,
    population: Vec<Competitor>,
}

impl Tournament {
    /// Creates a tournament from an existing population.
    ///
    /// The population must hold exactly `pool_size` competitors, since every
    /// generation is rebuilt to that size.
    pub fn new(
        config: TournamentConfig,
        population: Vec<Competitor>,
        generation: usize,
    ) -> Result<Self, TournamentConfigError> {
        if population.len() != config.pool_size {
            return Err(TournamentConfigError::PopulationSize {
                expected: config.pool_size,
                actual: population.len(),
            });
        }
        Ok(Self {
            config,
            generation,
            population,
        })
    }

    /// Creates a tournament at generation 0 with `pool_size` random competitors.
    ///
    /// # Panics
    ///
    /// Panics if the config's weight range is empty.
    pub fn random<R>(config: TournamentConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let population = (0..config.pool_size)
            .map(|_| config.random_competitor(0, rng))
            .collect();
        Self {
            config,
            generation: 0,
            population,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn population(&self) -> &[Competitor] {
        &self.population
    }

    /// Plays every unordered pair twice and returns the round's win counts.
    ///
    /// Losers remember the board one ply before the winning move.
    pub fn play_round_robin(&mut self) -> Result<Leaderboard, MatchError> {
        let n = self.population.len();
        let mut leaderboard = Leaderboard::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                for (first, second) in [(i, j), (j, i)] {
                    let record =
                        match_play::play_match(&self.population[first], &self.population[second])?;
                    tracing::debug!(
                        generation = self.generation,
                        first,
                        second,
                        outcome = ?record.outcome,
                        moves = record.moves.len(),
                        "match finished",
                    );
                    let Some(winner) = record.winner() else {
                        leaderboard.record_draw();
                        continue;
                    };
                    let (winner, loser) = match winner {
                        Seat::First => (first, second),
                        Seat::Second => (second, first),
                    };
                    leaderboard.credit_win(winner);
                    self.population[loser].remember_loss(&record.pre_terminal_board)?;
                }
            }
        }
        Ok(leaderboard)
    }

    /// The population ranked by `leaderboard`, most wins first.
    #[must_use]
    pub fn standings(&self, leaderboard: &Leaderboard) -> Vec<Standing> {
        leaderboard
            .ranking()
            .into_iter()
            .map(|i| Standing {
                competitor: self.population[i].clone(),
                wins: leaderboard.wins(i),
            })
            .collect()
    }

    /// The top half of the population by wins, in rank order.
    #[must_use]
    pub fn select_breeders(&self, leaderboard: &Leaderboard) -> Vec<Competitor> {
        let keep = self.population.len() / 2;
        leaderboard
            .ranking()
            .into_iter()
            .take(keep)
            .map(|i| self.population[i].clone())
            .collect()
    }

    /// Replaces the population with the next generation.
    ///
    /// Keeps the top half by `leaderboard`, breeds one child per shuffled
    /// pair of survivors and fills the remaining slots with random
    /// competitors.
    ///
    /// # Panics
    ///
    /// Panics if the config's mutation rate is outside `[0, 1]` or its weight
    /// range is empty.
    pub fn advance<R>(&mut self, leaderboard: &Leaderboard, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let next_generation = self.generation + 1;
        let mut next = self.select_breeders(leaderboard);
        next.shuffle(rng);

        let children = breed(&next, next_generation, &self.config, rng);
        let (survivors, bred) = (next.len(), children.len());
        next.extend(children);
        next.truncate(self.config.pool_size);
        while next.len() < self.config.pool_size {
            next.push(self.config.random_competitor(next_generation, rng));
        }

        tracing::debug!(
            generation = next_generation,
            survivors,
            children = bred,
            fresh = next.len().saturating_sub(survivors + bred),
            "population advanced",
        );
        self.population = next;
        self.generation = next_generation;
    }

    /// Runs one full generation: round-robin, report, then breeding.
    pub fn run_generation<R>(&mut self, rng: &mut R) -> Result<GenerationReport, MatchError>
    where
        R: Rng + ?Sized,
    {
        let leaderboard = self.play_round_robin()?;
        let n = self.population.len();
        let report = GenerationReport {
            generation: self.generation,
            standings: self.standings(&leaderboard),
            matches: u32::try_from(n * n.saturating_sub(1)).unwrap_or(u32::MAX),
            draws: leaderboard.draws(),
            stats: PopulationStats::new(&self.population, leaderboard.all_wins()),
        };
        if let Some(champion) = report.champion() {
            tracing::info!(
                generation = report.generation,
                champion_wins = champion.wins,
                draws = report.draws,
                matches = report.matches,
                "generation complete",
            );
        }
        self.advance(&leaderboard, rng);
        Ok(report)
    }
}

/// Produces one child for every consecutive pair of `parents`.
///
/// A trailing unpaired parent produces nothing.
pub fn breed<R>(
    parents: &[Competitor],
    child_generation: usize,
    config: &TournamentConfig,
    rng: &mut R,
) -> Vec<Competitor>
where
    R: Rng + ?Sized,
{
    parents
        .chunks_exact(2)
        .map(|pair| {
            let mut child = weights::average(pair[0].weights(), pair[1].weights());
            weights::mutate(&mut child, config.mutation_rate, config.mutation_step, rng);
            Competitor::new(child, child_generation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use tactoe_engine::Board;
    use tactoe_evaluator::{board_feature::BoardFeature, weights::Weights};

    use super::*;

    fn no_mutation() -> TournamentConfig {
        TournamentConfig {
            mutation_rate: 0.0,
            ..TournamentConfig::default()
        }
    }

    fn competitor(weights: [f32; 6]) -> Competitor {
        Competitor::new(Weights::from_array(weights), 0)
    }

    fn unmutated(population: Vec<Competitor>, generation: usize) -> Tournament {
        let config = TournamentConfig {
            pool_size: population.len(),
            ..no_mutation()
        };
        Tournament::new(config, population, generation).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(TournamentConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_configs() {
        let config = TournamentConfig {
            mutation_rate: 1.5,
            ..TournamentConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TournamentConfigError::MutationRate { rate: 1.5 })
        );
        let config = TournamentConfig {
            weight_range: 5..=-5,
            ..TournamentConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(TournamentConfigError::EmptyWeightRange { start: 5, end: -5 })
        );
    }

    #[test]
    fn test_breed_averages_parents_without_mutation() {
        let mut rng = Pcg32::seed_from_u64(10);
        let parents = [competitor([0.0; 6]), competitor([10.0; 6])];
        let children = breed(&parents, 4, &no_mutation(), &mut rng);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].weights(), &Weights::from_array([5.0; 6]));
        assert_eq!(children[0].generation(), 4);
        assert!(children[0].lost_positions().is_empty());
    }

    #[test]
    fn test_breed_pairs_consecutively() {
        let mut rng = Pcg32::seed_from_u64(11);
        let parents = [
            competitor([0.0; 6]),
            competitor([2.0; 6]),
            competitor([10.0; 6]),
            competitor([20.0; 6]),
            competitor([-8.0; 6]),
        ];
        let children = breed(&parents, 1, &no_mutation(), &mut rng);
        let weights: Vec<_> = children.iter().map(|c| *c.weights()).collect();
        assert_eq!(
            weights,
            vec![Weights::from_array([1.0; 6]), Weights::from_array([15.0; 6])]
        );
    }

    #[test]
    fn test_round_robin_plays_every_ordered_pair() {
        let mut rng = Pcg32::seed_from_u64(12);
        let config = TournamentConfig {
            pool_size: 5,
            ..TournamentConfig::default()
        };
        let mut tournament = Tournament::random(config, &mut rng);
        let leaderboard = tournament.play_round_robin().unwrap();
        let wins: u32 = leaderboard.all_wins().iter().sum();
        assert_eq!(wins + leaderboard.draws(), 5 * 4);
        // two games per pair, so nobody can win more than 2 * (n - 1)
        assert!(leaderboard.all_wins().iter().all(|w| *w <= 8));
    }

    #[test]
    fn test_round_robin_records_losses() {
        // flat competitors always take the first legal move, so the side
        // moving first wins both games
        let population = vec![competitor([0.0; 6]), competitor([0.0; 6])];
        let mut tournament = unmutated(population, 0);
        let leaderboard = tournament.play_round_robin().unwrap();
        assert_eq!(leaderboard.all_wins(), &[1, 1]);
        assert_eq!(leaderboard.draws(), 0);

        let lost: Board = "XOXOXO...".parse().unwrap();
        for competitor in tournament.population() {
            assert_eq!(competitor.lost_positions().len(), 1);
            assert!(competitor.has_lost_from(&lost));
        }
    }

    #[test]
    fn test_select_breeders_keeps_top_half_by_wins() {
        let population = vec![
            competitor([0.0; 6]),
            competitor([1.0; 6]),
            competitor([2.0; 6]),
            competitor([3.0; 6]),
            competitor([4.0; 6]),
        ];
        let tournament = unmutated(population, 0);
        let mut leaderboard = Leaderboard::new(5);
        for (i, wins) in [0, 5, 3, 3, 1].into_iter().enumerate() {
            for _ in 0..wins {
                leaderboard.credit_win(i);
            }
        }
        let breeders = tournament.select_breeders(&leaderboard);
        let weights: Vec<_> = breeders
            .iter()
            .map(|c| c.weights()[BoardFeature::CornerCount])
            .collect();
        assert_eq!(weights, vec![1.0, 2.0]);
    }

    #[test]
    fn test_advance_builds_next_generation() {
        let mut rng = Pcg32::seed_from_u64(13);
        let population = vec![
            competitor([0.0; 6]),
            competitor([6.0; 6]),
            competitor([2.0; 6]),
            competitor([-7.0; 6]),
        ];
        let mut tournament = unmutated(population, 3);
        let mut leaderboard = Leaderboard::new(4);
        leaderboard.credit_win(1);
        leaderboard.credit_win(1);
        leaderboard.credit_win(2);

        tournament.advance(&leaderboard, &mut rng);
        assert_eq!(tournament.generation(), 4);
        let next = tournament.population();
        assert_eq!(next.len(), 4);

        // the two survivors keep their original generation
        let survivors: Vec<_> = next.iter().filter(|c| c.generation() == 0).collect();
        assert_eq!(survivors.len(), 2);
        assert!(survivors.iter().any(|c| c.weights() == &Weights::from_array([6.0; 6])));
        assert!(survivors.iter().any(|c| c.weights() == &Weights::from_array([2.0; 6])));

        // one averaged child and one random filler, both tagged with the new generation
        assert_eq!(next[2].weights(), &Weights::from_array([4.0; 6]));
        assert_eq!(next[2].generation(), 4);
        assert_eq!(next[3].generation(), 4);
    }

    #[test]
    fn test_population_size_is_preserved() {
        let mut rng = Pcg32::seed_from_u64(14);
        for pool_size in 0..=9 {
            let config = TournamentConfig {
                pool_size,
                ..TournamentConfig::default()
            };
            let mut tournament = Tournament::random(config, &mut rng);
            for generation in 0..4 {
                assert_eq!(tournament.generation(), generation);
                let report = tournament.run_generation(&mut rng).unwrap();
                assert_eq!(report.generation, generation);
                assert_eq!(report.standings.len(), pool_size);
                assert_eq!(tournament.population().len(), pool_size);
            }
        }
    }

    #[test]
    fn test_new_rejects_population_of_wrong_size() {
        let population = vec![competitor([0.0; 6]); 4];
        let err = Tournament::new(TournamentConfig::default(), population, 0).unwrap_err();
        assert_eq!(
            err,
            TournamentConfigError::PopulationSize {
                expected: 8,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_existing_population_keeps_its_size() {
        let mut rng = Pcg32::seed_from_u64(17);
        for size in [1, 4, 5] {
            let population = vec![competitor([1.0, 2.0, -5.0, 9.0, 3.0, -4.0]); size];
            let config = TournamentConfig {
                pool_size: size,
                ..TournamentConfig::default()
            };
            let mut tournament = Tournament::new(config, population, 2).unwrap();
            for _ in 0..3 {
                tournament.run_generation(&mut rng).unwrap();
                assert_eq!(tournament.population().len(), size);
            }
            assert_eq!(tournament.generation(), 5);
        }
    }

    #[test]
    fn test_report_standings_are_ranked() {
        let mut rng = Pcg32::seed_from_u64(15);
        let mut tournament = Tournament::random(TournamentConfig::default(), &mut rng);
        let report = tournament.run_generation(&mut rng).unwrap();
        assert!(report.standings.is_sorted_by(|a, b| a.wins >= b.wins));
        assert_eq!(report.matches, 8 * 7);
        let wins: u32 = report.standings.iter().map(|s| s.wins).sum();
        assert_eq!(wins + report.draws, report.matches);
        assert_eq!(
            report.champion().map(|s| s.wins),
            Some(report.standings[0].wins)
        );
        let stats = report.stats.as_ref().unwrap();
        assert!(stats.weights.iter().all(|s| s.min >= -30.0 && s.max <= 30.0));
    }

    #[test]
    fn test_random_fillers_use_weight_range() {
        let mut rng = Pcg32::seed_from_u64(16);
        let config = TournamentConfig {
            pool_size: 3,
            weight_range: -2..=2,
            ..TournamentConfig::default()
        };
        let tournament = Tournament::random(config, &mut rng);
        for competitor in tournament.population() {
            assert_eq!(competitor.generation(), 0);
            assert!(competitor.weights().iter().all(|w| (-2.0..=2.0).contains(&w)));
        }
    }
}

//! Genetic tournament for evolving tic-tac-toe competitors.
//!
//! This crate breeds weight vectors for the evaluator
//! ([`tactoe_evaluator::competitor::Competitor`]) by letting a population play
//! itself and recombining the winners.
//!
//! # How Training Works
//!
//! 1. **Population** - Start from competitors with random integer weights
//! 2. **Round-Robin** - Every pair plays two greedy games, one with each side
//!    moving first; the completer of a line is credited a win
//! 3. **Ranking** - Sort by win count (stable with respect to population order)
//! 4. **Selection** - Keep the top half as breeders
//! 5. **Breeding** - Pair shuffled breeders; each pair yields one child whose
//!    weights are the parents' average, then mutated by ±1
//! 6. **Repopulation** - Breeders and children carry over; the remaining slots
//!    are filled with fresh random competitors
//! 7. **Repeat** - For as many generations as the caller asks for
//!
//! # Architecture
//!
//! ```text
//! Tournament (generations)
//!     ↓ schedules
//! Match Play (one greedy game)
//!     ↓ uses
//! Competitor::best_move (tactoe-evaluator)
//!     ↓ credits
//! Leaderboard (wins per competitor, reset every round)
//!     ↓ ranks
//! Selection & Breeding (weights module)
//! ```
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng as _;
//! use tactoe_training::tournament::{Tournament, TournamentConfig};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let config = TournamentConfig { pool_size: 6, ..TournamentConfig::default() };
//! let mut tournament = Tournament::random(config, &mut rng);
//!
//! for _ in 0..3 {
//!     let report = tournament.run_generation(&mut rng)?;
//!     assert_eq!(report.standings.len(), 6);
//! }
//! assert_eq!(tournament.generation(), 3);
//! assert_eq!(tournament.population().len(), 6);
//! # Ok::<(), tactoe_training::match_play::MatchError>(())
//! ```
//!
//! # Current Limitations
//!
//! - **Greedy play only**: Competitors look one move ahead, so most games are
//!   decided by who spots an open line first.
//! - **Single-threaded**: Matches are independent and could run in parallel,
//!   but the round-robin loop plays them one after another.
//! - **Wins only**: Draws earn nothing, so a population of perfect blockers
//!   cannot be told apart.

pub mod leaderboard;
pub mod match_play;
pub mod stats;
pub mod tournament;
pub mod weights;

/// Win counts for one tournament round.
///
/// Entries are indexed by position in the round's population. A new
/// leaderboard is created for every round, so counts never carry over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    wins: Vec<u32>,
    draws: u32,
}

impl Leaderboard {
    #[must_use]
    pub fn new(competitor_count: usize) -> Self {
        Self {
            wins: vec![0; competitor_count],
            draws: 0,
        }
    }

    pub fn credit_win(&mut self, index: usize) {
        self.wins[index] += 1;
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    #[must_use]
    pub fn wins(&self, index: usize) -> u32 {
        self.wins[index]
    }

    #[must_use]
    pub fn all_wins(&self) -> &[u32] {
        &self.wins
    }

    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Competitor indices ordered by win count, most wins first.
    ///
    /// Equal win counts keep their population order.
    #[must_use]
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.wins.len()).collect();
        order.sort_by_key(|i| std::cmp::Reverse(self.wins[*i]));
        order
    }
}

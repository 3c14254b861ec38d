use std::fmt;
use std::time::Duration;

/// Diagnostics for one `get_move` call.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    /// Score of the chosen line from the bot's point of view.
    pub score: i32,
    pub elapsed: Duration,
    /// Moves expanded during the search.
    pub states: u64,
    pub depth: u32,
    pub cache_hits: u64,
    /// The move was picked at random rather than searched.
    pub random: bool,
}

impl SearchReport {
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.random {
            return write!(f, "random move in {:.3}s", self.elapsed_secs());
        }
        write!(
            f,
            "depth {} score {} states {} cache hits {} in {:.3}s",
            self.depth,
            self.score,
            self.states,
            self.cache_hits,
            self.elapsed_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = SearchReport {
            score: 3,
            elapsed: Duration::from_millis(1500),
            states: 1234,
            depth: 3,
            cache_hits: 17,
            random: false,
        };
        assert_eq!(
            report.to_string(),
            "depth 3 score 3 states 1234 cache hits 17 in 1.500s"
        );
        assert!((report.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_display_random() {
        let report = SearchReport {
            score: 0,
            elapsed: Duration::ZERO,
            states: 0,
            depth: 0,
            cache_hits: 0,
            random: true,
        };
        assert_eq!(report.to_string(), "random move in 0.000s");
    }
}

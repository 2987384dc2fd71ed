//! Match configuration options.

use std::path::PathBuf;

/// Configuration options for a match of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::WarOptions;
///
/// let options = WarOptions::default()
///     .with_player_count(4)
///     .with_verbose(true)
///     .with_logging(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarOptions {
    /// Number of players (at least 2).
    pub player_count: usize,
    /// Whether to print round narration to stdout.
    pub verbose: bool,
    /// Whether to record a structured match log and save it at the end.
    pub logging: bool,
    /// Directory the match log is written to.
    pub log_dir: PathBuf,
}

impl Default for WarOptions {
    fn default() -> Self {
        Self {
            player_count: 2,
            verbose: false,
            logging: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl WarOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::WarOptions;
    ///
    /// let options = WarOptions::default().with_player_count(3);
    /// assert_eq!(options.player_count, 3);
    /// ```
    #[must_use]
    pub const fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Sets whether round narration is printed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::WarOptions;
    ///
    /// let options = WarOptions::default().with_verbose(true);
    /// assert!(options.verbose);
    /// ```
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets whether a match log is recorded.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::WarOptions;
    ///
    /// let options = WarOptions::default().with_logging(true);
    /// assert!(options.logging);
    /// ```
    #[must_use]
    pub const fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    /// Sets the directory match logs are written to.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::WarOptions;
    ///
    /// let options = WarOptions::default().with_log_dir("out/logs");
    /// assert_eq!(options.log_dir, std::path::PathBuf::from("out/logs"));
    /// ```
    #[must_use]
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }
}

//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(3.0)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Maximum number of hands a player may hold after splitting.
    pub max_hands: usize,
    /// Dealer keeps hitting while below this many points.
    pub dealer_stands_on: u32,
    /// Payout multiplier for a winning hand (stake included).
    pub win_pays: f64,
    /// Payout multiplier for a blackjack (stake included).
    pub blackjack_pays: f64,
    /// Payout multiplier for a push (stake included).
    pub push_pays: f64,
    /// Fraction of the shoe dealt out before a refill is due.
    /// 0 to disable the check.
    pub penetration: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            max_hands: 4,
            dealer_stands_on: 17,
            win_pays: 2.0,
            blackjack_pays: 2.5,
            push_pays: 1.0,
            penetration: 0.75,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the maximum number of hands per player.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets the point total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, points: u32) -> Self {
        self.dealer_stands_on = points;
        self
    }

    /// Sets the payout multiplier for a win.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_pays(1.95);
    /// assert_eq!(options.win_pays, 1.95);
    /// ```
    #[must_use]
    pub const fn with_win_pays(mut self, multiplier: f64) -> Self {
        self.win_pays = multiplier;
        self
    }

    /// Sets the payout multiplier for a blackjack.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(2.2);
    /// assert_eq!(options.blackjack_pays, 2.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, multiplier: f64) -> Self {
        self.blackjack_pays = multiplier;
        self
    }

    /// Sets the payout multiplier for a push.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_push_pays(0.0);
    /// assert_eq!(options.push_pays, 0.0);
    /// ```
    #[must_use]
    pub const fn with_push_pays(mut self, multiplier: f64) -> Self {
        self.push_pays = multiplier;
        self
    }

    /// Sets the shoe penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.5);
    /// assert_eq!(options.penetration, 0.5);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}

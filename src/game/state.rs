//! Round phase tracking.

/// Phase of the current round.
///
/// The tag follows the operations that have been called; it is informational
/// and the game does not reject calls made out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Accepting bets for the next round.
    #[default]
    Betting,
    /// Initial cards are dealt; players act on their hands.
    PlayerTurns,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Hands have been settled and paid.
    Payout,
    /// Cards have been moved to the discard pile.
    Discard,
}

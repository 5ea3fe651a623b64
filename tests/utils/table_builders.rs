use blackjack::{Card, Dealer, Player, Shoe};

/// Parses compact card codes such as `"KS"` or `"10H"`.
pub fn cards(codes: &[&str]) -> Vec<Card> {
    codes
        .iter()
        .map(|code| Card::from_string(code).unwrap())
        .collect()
}

/// Builds a player and a dealer whose shoe deals a known sequence first,
/// followed by the rest of a full deck.
pub struct TableBuilder {
    name: String,
    chips: u32,
    top: Vec<Card>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            name: "alice".to_string(),
            chips: 50,
            top: Vec::new(),
        }
    }

    pub fn with_chips(mut self, chips: u32) -> Self {
        self.chips = chips;
        self
    }

    /// Cards dealt first, in order: player, dealer, player, dealer, then
    /// whatever the round draws next.
    pub fn with_shoe_top(mut self, codes: &[&str]) -> Self {
        self.top = cards(codes);
        self
    }

    pub fn build(self) -> (Player, Dealer) {
        let mut order = self.top;
        let rest: Vec<Card> = Card::full_deck()
            .into_iter()
            .filter(|card| !order.contains(card))
            .collect();
        order.extend(rest);
        assert_eq!(order.len(), 52, "stacked cards must be distinct");

        (
            Player::new(self.name, self.chips),
            Dealer::with_shoe(Shoe::stacked(order)),
        )
    }
}

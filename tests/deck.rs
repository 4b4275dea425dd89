//! Deck integration tests.

use deckrs::{
    Card, DECK_SIZE, Deck, DeckOptions, EmptyDeckError, InsufficientCardsError, Rank, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn canonical() -> Vec<Card> {
    Card::all().collect()
}

#[test]
fn new_deck_holds_canonical_order() {
    let deck = Deck::new();
    assert_eq!(deck.remaining_count(), DECK_SIZE);
    assert!(deck.iter().eq(Card::all()));

    let seeded = Deck::with_seed(3);
    assert!(seeded.iter().eq(Card::all()));
}

#[test]
fn draw_removes_top_card() {
    let mut deck = Deck::with_seed(1);
    let drawn = deck.draw().unwrap();

    assert_eq!(drawn, Card::from_index(0));
    assert!(drawn.is_valid());
    assert_eq!(deck.remaining_count(), 51);
    assert_eq!(deck.peek_top(), Ok(Card::from_index(1)));
}

#[test]
fn draw_many_and_insufficient_cards() {
    let mut deck = Deck::with_seed(1);

    let cards = deck.draw_many(5).unwrap();
    assert_eq!(cards, canonical()[..5]);
    assert_eq!(deck.remaining_count(), 47);

    assert_eq!(
        deck.draw_many(48).unwrap_err(),
        InsufficientCardsError {
            requested: 48,
            remaining: 47,
        }
    );
    assert_eq!(deck.remaining_count(), 47);
    assert_eq!(deck.peek_top(), Ok(Card::from_index(5)));

    let rest = deck.draw_many(47).unwrap();
    assert_eq!(rest, canonical()[5..]);
    assert!(deck.is_empty());
    assert_eq!(deck.draw_many(0).unwrap(), Vec::<Card>::new());
}

#[test]
fn peek_matches_next_draw() {
    let mut deck = Deck::with_seed(9);
    deck.shuffle();

    let top = deck.peek_top().unwrap();
    assert_eq!(deck.remaining_count(), DECK_SIZE);
    assert_eq!(deck.draw().unwrap(), top);

    deck.draw_many(51).unwrap();
    assert_eq!(deck.peek_top(), Err(EmptyDeckError));
}

#[test]
fn insert_top_becomes_next_card() {
    let mut deck = Deck::with_seed(2);
    let ace = card(Suit::Spades, Rank::Ace);

    deck.insert_top(ace);
    assert_eq!(deck.remaining_count(), 53);
    assert_eq!(deck.peek_top(), Ok(ace));
    assert_eq!(deck.draw(), Ok(ace));
    assert_eq!(deck.draw(), Ok(Card::from_index(0)));
}

#[test]
fn insert_bottom_is_drawn_last() {
    let mut deck = Deck::with_seed(2);
    let ace = card(Suit::Spades, Rank::Ace);

    deck.insert_bottom(ace);
    assert_eq!(deck.remaining_count(), 53);

    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }
    assert_eq!(deck.draw(), Ok(ace));
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn inserts_accept_invalid_and_duplicate_cards() {
    let mut deck = Deck::with_seed(2);
    deck.draw_many(DECK_SIZE).unwrap();

    let invalid = Card::from_index(200);
    let ten = card(Suit::Clubs, Rank::Ten);
    deck.insert_bottom(ten);
    deck.insert_bottom(ten);
    deck.insert_top(invalid);

    let order: Vec<Card> = deck.iter().collect();
    assert_eq!(order, [invalid, ten, ten]);
}

#[test]
fn extend_appends_in_order() {
    let mut deck = Deck::with_seed(4);
    deck.draw_many(50).unwrap();
    deck.extend([card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Three)]);

    let order: Vec<Card> = deck.iter().collect();
    assert_eq!(
        order,
        [
            Card::from_index(50),
            Card::from_index(51),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Hearts, Rank::Three),
        ]
    );
}

#[test]
fn drawing_past_empty_fails() {
    let mut deck = Deck::new();
    for i in 0..DECK_SIZE {
        assert!(deck.draw().is_ok(), "draw {i} should succeed");
    }
    assert_eq!(deck.draw(), Err(EmptyDeckError));
    assert!(deck.is_empty());
}

#[test]
fn shuffle_moves_most_cards() {
    for seed in 0..20 {
        let mut deck = Deck::with_seed(seed);
        deck.shuffle();

        let order: Vec<Card> = deck.iter().collect();
        let matching = order
            .iter()
            .zip(Card::all())
            .filter(|(a, b)| **a == *b)
            .count();
        assert!(
            matching <= 45,
            "shuffle appears ineffective: {matching}/52 cards in same position"
        );

        let mut sorted = order;
        sorted.sort();
        assert_eq!(sorted, canonical());
    }
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let mut a = Deck::with_seed(42);
    let mut b = Deck::with_seed(42);
    a.shuffle();
    b.shuffle();
    assert!(a.iter().eq(b.iter()));

    let mut c = Deck::with_seed(43);
    c.shuffle();
    assert!(!a.iter().eq(c.iter()));
}

#[test]
fn shuffle_with_external_rng() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut a = Deck::with_seed(0);
    let mut b = Deck::with_seed(1);
    a.shuffle_with(&mut ChaCha8Rng::seed_from_u64(5));
    b.shuffle_with(&mut ChaCha8Rng::seed_from_u64(5));
    assert!(a.iter().eq(b.iter()));
}

#[test]
fn shuffle_handles_small_decks() {
    let mut deck = Deck::with_seed(8);
    deck.draw_many(DECK_SIZE).unwrap();
    deck.shuffle();
    assert!(deck.is_empty());

    deck.insert_top(Card::from_index(7));
    deck.shuffle();
    assert_eq!(deck.peek_top(), Ok(Card::from_index(7)));
}

#[test]
fn reset_restores_canonical_deck() {
    let mut deck = Deck::new();
    deck.draw_many(10).unwrap();
    deck.insert_top(Card::from_index(3));
    deck.insert_bottom(Card::from_index(99));
    deck.shuffle();

    deck.reset();
    assert_eq!(deck.remaining_count(), DECK_SIZE);
    assert!(deck.iter().eq(Card::all()));

    deck.reset();
    assert_eq!(deck.remaining_count(), DECK_SIZE);
    assert!(deck.iter().eq(Card::all()));
}

#[test]
fn shuffled_option_applies_on_reset() {
    let options = DeckOptions::default().with_shuffled(true);
    let mut deck = Deck::with_options(options, 11);
    assert_eq!(deck.options(), options);
    assert!(!deck.iter().eq(Card::all()));

    deck.draw_many(20).unwrap();
    deck.reset();
    assert_eq!(deck.remaining_count(), DECK_SIZE);

    let mut sorted: Vec<Card> = deck.iter().collect();
    assert_ne!(sorted, canonical());
    sorted.sort();
    assert_eq!(sorted, canonical());
}

#[test]
fn default_options_keep_canonical_order() {
    let options = DeckOptions::default();
    assert!(!options.shuffled);
    assert!(Deck::default().iter().eq(Card::all()));
}

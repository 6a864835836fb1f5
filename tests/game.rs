//! Game integration tests.

use std::collections::HashSet;

use klondike::card::{ACE, KING, QUEEN};
use klondike::{
    Board, Card, DECK_SIZE, FOUNDATION_COUNT, Game, GameOptions, IndexError, Outcome, Pile,
    Renderer, Selection, Suit, TABLEAU_COUNT, TextRenderer, Zone,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn up(suit: Suit, rank: u8) -> Card {
    Card::face_up(suit, rank)
}

const fn down(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Arranges a board from waste cards and tableau piles.
fn arranged(waste: Vec<Card>, piles: Vec<(usize, Vec<Card>)>) -> Board {
    let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();
    for (index, cards) in piles {
        tableau[index] = Pile::from(cards);
    }
    Board::from_piles(Pile::new(), Pile::from(waste), Default::default(), tableau)
}

fn game_with(board: Board) -> Game {
    Game::from_board(board, GameOptions::default(), 7)
}

fn assert_board_invariants(game: &Game) {
    let board = game.board();

    let cards: Vec<_> = board.cards().map(|c| (c.rank(), c.suit())).collect();
    let unique: HashSet<_> = cards.iter().copied().collect();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);

    assert!(board.stock().cards().iter().all(|c| !c.is_face_up()));
    assert!(board.waste().cards().iter().all(Card::is_face_up));

    for foundation in board.foundations() {
        let cards = foundation.cards();
        for (position, card) in cards.iter().enumerate() {
            assert_eq!(usize::from(card.rank()), position + 1);
            assert_eq!(card.suit(), cards[0].suit());
        }
    }

    for pile in board.tableau() {
        let cards = pile.cards();
        let face_down = cards.iter().take_while(|c| !c.is_face_up()).count();
        let face_up = &cards[face_down..];
        assert!(face_up.iter().all(Card::is_face_up));
        for pair in face_up.windows(2) {
            assert_eq!(pair[0].rank(), pair[1].rank() + 1);
            assert_ne!(pair[0].is_red(), pair[1].is_red());
        }
    }

    if let Selection::Pile(index) = game.selection() {
        assert!(board.pile(index).unwrap().top().is_some_and(Card::is_face_up));
    }
    if game.is_waste_selected() {
        assert!(board.waste_top().is_some());
    }
}

#[test]
fn new_game_starts_unselected() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.selection(), Selection::None);
    assert!(!game.is_waste_selected());
    assert!(!game.is_pile_selected());
    assert_eq!(game.selected_pile(), None);
    assert_eq!(game.activations(), 0);
    assert!(!game.is_won());
    assert_eq!(game.board().stock_len(), 24);
    assert_board_invariants(&game);
}

#[test]
fn same_seed_deals_same_board() {
    let a = Game::new(GameOptions::default(), 99);
    let b = Game::new(GameOptions::default(), 99);
    let c = Game::new(GameOptions::default(), 100);
    assert_eq!(a.board(), b.board());
    assert_ne!(a.board(), c.board());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default();
    assert!(options.clear_selection_on_rejected_move);

    let options = options.with_clear_selection_on_rejected_move(false);
    assert!(!options.clear_selection_on_rejected_move);
    assert!(!Game::new(options, 1).options().clear_selection_on_rejected_move);
}

#[test]
fn stock_draws_then_recycles() {
    let mut game = Game::new(GameOptions::default(), 5);

    for _ in 0..8 {
        assert_eq!(game.stock_activated(), Outcome::Drew(3));
    }
    assert_eq!(game.board().stock_len(), 0);
    assert_eq!(game.board().waste_len(), 24);

    assert_eq!(game.stock_activated(), Outcome::Recycled(24));
    assert_eq!(game.board().stock_len(), 24);
    assert_eq!(game.board().waste_len(), 0);
    assert!(game.board().stock().cards().iter().all(|c| !c.is_face_up()));

    assert_eq!(game.activate(Zone::Stock).unwrap(), Outcome::Drew(3));
    assert_eq!(game.activations(), 10);
    assert_board_invariants(&game);
}

#[test]
fn stock_with_nothing_left_is_ignored() {
    let mut game = game_with(Board::empty());
    assert_eq!(game.stock_activated(), Outcome::Ignored);
    assert_eq!(game.activations(), 1);
}

#[test]
fn stock_is_ignored_while_selected() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.stock_activated();
    assert_eq!(game.waste_activated(), Outcome::Selected(Selection::Waste));

    assert_eq!(game.stock_activated(), Outcome::Ignored);
    assert_eq!(game.board().waste_len(), 3);
    assert!(game.is_waste_selected());
}

#[test]
fn waste_toggles_selection() {
    let mut game = Game::new(GameOptions::default(), 5);
    assert_eq!(game.waste_activated(), Outcome::Ignored);
    assert_eq!(game.selection(), Selection::None);

    game.stock_activated();
    assert_eq!(game.waste_activated(), Outcome::Selected(Selection::Waste));
    assert!(game.is_waste_selected());
    assert_eq!(game.waste_activated(), Outcome::Deselected);
    assert_eq!(game.selection(), Selection::None);
}

#[test]
fn waste_is_ignored_while_a_pile_is_selected() {
    let mut game = game_with(arranged(
        vec![up(Suit::Hearts, 4)],
        vec![(0, vec![up(Suit::Clubs, 9)])],
    ));
    game.pile_activated(0).unwrap();
    assert_eq!(game.waste_activated(), Outcome::Ignored);
    assert_eq!(game.selected_pile(), Some(0));
}

#[test]
fn waste_card_goes_to_foundation() {
    let mut game = game_with(arranged(vec![up(Suit::Spades, ACE)], vec![]));
    game.waste_activated();

    let outcome = game.foundation_activated(2).unwrap();
    assert_eq!(
        outcome,
        Outcome::Moved {
            from: Zone::Waste,
            to: Zone::Foundation(2),
            cards: 1
        }
    );
    assert!(outcome.changed_board());
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(game.board().foundation_top(2).unwrap(), Some(&up(Suit::Spades, ACE)));
    assert!(game.board().waste_top().is_none());
}

#[test]
fn illegal_foundation_move_keeps_selection() {
    let mut game = game_with(arranged(vec![up(Suit::Spades, 2)], vec![]));
    game.waste_activated();

    let outcome = game.foundation_activated(0).unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert!(!outcome.changed_board());
    assert!(game.is_waste_selected());
    assert_eq!(game.board().waste_len(), 1);
}

#[test]
fn foundation_without_selection_is_ignored() {
    let mut game = game_with(arranged(vec![up(Suit::Spades, ACE)], vec![]));
    assert_eq!(game.foundation_activated(0).unwrap(), Outcome::Ignored);
    assert_eq!(game.board().waste_len(), 1);
}

#[test]
fn pile_card_goes_to_foundation() {
    let mut game = game_with(arranged(
        vec![],
        vec![(4, vec![down(Suit::Hearts, 7), up(Suit::Clubs, ACE)])],
    ));

    assert_eq!(
        game.pile_activated(4).unwrap(),
        Outcome::Selected(Selection::Pile(4))
    );
    assert!(game.is_pile_selected());
    assert_eq!(game.selected_pile(), Some(4));

    assert_eq!(
        game.foundation_activated(1).unwrap(),
        Outcome::Moved {
            from: Zone::Tableau(4),
            to: Zone::Foundation(1),
            cards: 1
        }
    );
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(game.board().tableau_pile(4).unwrap(), [down(Suit::Hearts, 7)]);

    assert_eq!(game.pile_activated(4).unwrap(), Outcome::Flipped(4));
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(game.board().tableau_pile(4).unwrap(), [up(Suit::Hearts, 7)]);
    assert_eq!(
        game.pile_activated(4).unwrap(),
        Outcome::Selected(Selection::Pile(4))
    );
}

#[test]
fn same_pile_deselects() {
    let mut game = game_with(arranged(vec![], vec![(2, vec![up(Suit::Clubs, 9)])]));
    game.pile_activated(2).unwrap();
    assert_eq!(game.pile_activated(2).unwrap(), Outcome::Deselected);
    assert_eq!(game.selected_pile(), None);
}

#[test]
fn empty_pile_without_selection_is_ignored() {
    let mut game = game_with(Board::empty());
    assert_eq!(game.pile_activated(6).unwrap(), Outcome::Ignored);
    assert_eq!(game.selection(), Selection::None);
}

#[test]
fn face_up_run_moves_between_piles() {
    let mut game = game_with(arranged(
        vec![],
        vec![
            (0, vec![down(Suit::Clubs, KING), up(Suit::Hearts, 9), up(Suit::Spades, 8)]),
            (1, vec![up(Suit::Spades, 10)]),
        ],
    ));

    game.pile_activated(0).unwrap();
    assert_eq!(
        game.pile_activated(1).unwrap(),
        Outcome::Moved {
            from: Zone::Tableau(0),
            to: Zone::Tableau(1),
            cards: 2
        }
    );
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(
        game.board().tableau_pile(1).unwrap(),
        [up(Suit::Spades, 10), up(Suit::Hearts, 9), up(Suit::Spades, 8)]
    );
    assert_eq!(game.board().tableau_pile(0).unwrap(), [down(Suit::Clubs, KING)]);
}

#[test]
fn king_run_moves_to_empty_pile() {
    let mut game = game_with(arranged(
        vec![],
        vec![(3, vec![down(Suit::Hearts, 2), up(Suit::Diamonds, KING), up(Suit::Clubs, QUEEN)])],
    ));

    game.pile_activated(3).unwrap();
    assert_eq!(
        game.pile_activated(5).unwrap(),
        Outcome::Moved {
            from: Zone::Tableau(3),
            to: Zone::Tableau(5),
            cards: 2
        }
    );
    assert_eq!(game.board().tableau_pile(3).unwrap(), [down(Suit::Hearts, 2)]);
}

#[test]
fn rejected_run_returns_and_clears_selection() {
    let board = arranged(
        vec![],
        vec![
            (0, vec![down(Suit::Clubs, KING), up(Suit::Hearts, 9), up(Suit::Spades, 8)]),
            (1, vec![up(Suit::Hearts, 10)]),
        ],
    );
    let mut game = game_with(board.clone());

    game.pile_activated(0).unwrap();
    assert_eq!(game.pile_activated(1).unwrap(), Outcome::Rejected);
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(game.board(), &board);
}

#[test]
fn rejected_run_can_keep_selection() {
    let board = arranged(
        vec![],
        vec![(0, vec![up(Suit::Hearts, 9)]), (1, vec![up(Suit::Hearts, 10)])],
    );
    let options = GameOptions::default().with_clear_selection_on_rejected_move(false);
    let mut game = Game::from_board(board.clone(), options, 7);

    game.pile_activated(0).unwrap();
    assert_eq!(game.pile_activated(1).unwrap(), Outcome::Rejected);
    assert_eq!(game.selection(), Selection::Pile(0));
    assert_eq!(game.board(), &board);
}

#[test]
fn waste_card_goes_to_pile() {
    let mut game = game_with(arranged(
        vec![up(Suit::Hearts, QUEEN)],
        vec![(3, vec![up(Suit::Spades, KING)])],
    ));
    game.waste_activated();

    assert_eq!(game.pile_activated(4).unwrap(), Outcome::Ignored);
    assert!(game.is_waste_selected());

    assert_eq!(
        game.pile_activated(3).unwrap(),
        Outcome::Moved {
            from: Zone::Waste,
            to: Zone::Tableau(3),
            cards: 1
        }
    );
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(game.board().tableau_pile(3).unwrap().len(), 2);
}

#[test]
fn out_of_range_activations_fail_fast() {
    let mut game = game_with(arranged(vec![up(Suit::Hearts, 4)], vec![]));
    game.waste_activated();
    let before = game.board().clone();

    assert_eq!(game.foundation_activated(4), Err(IndexError::Foundation(4)));
    assert_eq!(game.pile_activated(7), Err(IndexError::Pile(7)));
    assert_eq!(game.activate(Zone::Tableau(9)), Err(IndexError::Pile(9)));
    assert_eq!(
        game.activate(Zone::Foundation(usize::MAX)),
        Err(IndexError::Foundation(usize::MAX))
    );

    assert_eq!(game.board(), &before);
    assert!(game.is_waste_selected());
    assert_eq!(game.activations(), 1);
}

#[test]
fn last_king_wins_the_game() {
    let mut foundations: [Pile; FOUNDATION_COUNT] =
        Suit::ALL.map(|suit| (ACE..=KING).map(|rank| up(suit, rank)).collect());
    foundations[3] = (ACE..=QUEEN).map(|rank| up(Suit::Spades, rank)).collect();
    let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();
    tableau[6] = Pile::from(vec![up(Suit::Spades, KING)]);
    let board = Board::from_piles(Pile::new(), Pile::new(), foundations, tableau);
    let mut game = game_with(board);

    assert!(!game.is_won());
    game.activate(Zone::Tableau(6)).unwrap();
    game.activate(Zone::Foundation(3)).unwrap();
    assert!(game.is_won());
    assert!(game.view().won);
    assert_board_invariants(&game);
}

#[test]
fn restart_deals_a_fresh_board() {
    let mut game = Game::new(GameOptions::default(), 8);
    let first = game.board().clone();
    game.stock_activated();
    game.waste_activated();

    game.restart();
    assert_eq!(game.activations(), 0);
    assert_eq!(game.selection(), Selection::None);
    assert_eq!(game.board().stock_len(), 24);
    assert_ne!(game.board(), &first);
    assert_board_invariants(&game);
}

#[test]
fn random_play_preserves_invariants() {
    for seed in 0..4 {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 1000);

        for _ in 0..3000 {
            let zone = match rng.random_range(0..13) {
                0 => Zone::Stock,
                1 => Zone::Waste,
                n @ 2..=5 => Zone::Foundation(n - 2),
                n => Zone::Tableau(n - 6),
            };
            game.activate(zone).unwrap();
            assert_board_invariants(&game);
        }

        assert_eq!(game.activations(), 3000);
    }
}

#[test]
fn text_renderer_marks_selection_and_hidden_cards() {
    let mut game = game_with(Board::from_piles(
        Pile::from(vec![down(Suit::Clubs, 5)]),
        Pile::from(vec![up(Suit::Hearts, ACE)]),
        Default::default(),
        {
            let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();
            tableau[0] = Pile::from(vec![down(Suit::Diamonds, 3), up(Suit::Spades, KING)]);
            tableau
        },
    ));

    let text = TextRenderer.draw(&game.view());
    assert!(text.contains(" ## "));
    assert!(text.contains(" Ah "));
    assert!(text.contains("0: ##  Ks "));
    assert!(text.contains("1: -- "));
    assert!(!text.contains("all foundations complete"));

    game.waste_activated();
    let text = TextRenderer.draw(&game.view());
    assert!(text.contains("[Ah]"));

    game.waste_activated();
    game.pile_activated(0).unwrap();
    let view = game.view();
    assert_eq!(view.selection, Selection::Pile(0));
    assert_eq!(view.stock_len, 1);
    assert_eq!(view.tableau[0].len(), 2);
    assert!(TextRenderer.draw(&view).contains("0: ## [Ks]"));
}

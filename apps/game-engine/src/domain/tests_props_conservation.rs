//! Property tests over random command scripts (pure domain).
//!
//! Properties tested:
//! - All 36 cards stay accounted for after every command
//! - Only the attacker may attack; only the defender may defend or take all
//! - The table never exceeds six cards
//! - Validation and mutation never disagree (no SERVER_ERROR)
//! - A game survives a serde round trip unchanged

use proptest::prelude::*;
use time::Duration;

use crate::domain::dealing::{new_game, NewPlayer};
use crate::domain::handlers::{apply, Action};
use crate::domain::state::{Game, GameSettings, MAX_TABLE_CARDS};
use crate::domain::test_gens::{player_count, script, Step, StepKind};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::T0;
use crate::domain::violations::RuleViolation;
use crate::domain::{Card, Rank, Suit};

const FALLBACK: Card = Card::new(Suit::Hearts, Rank::Six);

fn fresh_game(players: usize, seed: u64) -> Game {
    let seats: Vec<NewPlayer> = (0..players).map(|i| NewPlayer::new(format!("p{i}"))).collect();
    new_game("g-prop", &seats, GameSettings::default(), seed).unwrap()
}

fn start_all(game: &mut Game) {
    let ids: Vec<String> = game.players.iter().map(|p| p.id.clone()).collect();
    for id in ids {
        apply(game, &id, &Action::Ready, T0).unwrap();
    }
    game.take_events();
}

fn step_action(game: &Game, step: &Step) -> (String, Action) {
    let player = &game.players[step.player_pick % game.players.len()];
    let hand_card = if player.hand.is_empty() {
        FALLBACK
    } else {
        player.hand[step.card_pick % player.hand.len()]
    };
    let target = if game.table.is_empty() {
        FALLBACK
    } else {
        game.table[step.target_pick % game.table.len()].card
    };
    let action = match step.kind {
        StepKind::Ready => Action::Ready,
        StepKind::Attack => Action::Attack { card: hand_card },
        StepKind::Defend => Action::Defend {
            target_card: target,
            user_card: hand_card,
        },
        StepKind::EndAttack => Action::EndAttack,
        StepKind::TakeAllCards => Action::TakeAllCards,
        StepKind::CheckAttackTimer => Action::CheckAttackTimer,
        StepKind::CheckDefendTimer => Action::CheckDefendTimer,
    };
    (player.id.clone(), action)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: card conservation and table bound hold after every command
    #[test]
    fn prop_conservation_holds(
        players in player_count(),
        seed in any::<u64>(),
        steps in script(),
    ) {
        let mut game = fresh_game(players, seed);
        start_all(&mut game);
        let mut now = T0;

        for step in &steps {
            now += Duration::seconds(step.advance_secs);
            let (user_id, action) = step_action(&game, step);
            let result = apply(&mut game, &user_id, &action, now);
            game.take_events();

            prop_assert_ne!(result, Err(RuleViolation::ServerError));
            prop_assert!(game.table.len() <= MAX_TABLE_CARDS);
            prop_assert!(game.check_invariants().is_ok(), "{:?}", game.check_invariants());
        }
    }

    /// Property: turn exclusivity for attack, defend and take-all
    #[test]
    fn prop_turn_exclusivity(
        players in player_count(),
        seed in any::<u64>(),
        steps in script(),
    ) {
        let mut game = fresh_game(players, seed);
        start_all(&mut game);
        let mut now = T0;

        for step in &steps {
            now += Duration::seconds(step.advance_secs);
            let (user_id, action) = step_action(&game, step);
            let before = game.clone();
            let result = apply(&mut game, &user_id, &action, now);
            game.take_events();

            let defend_expired = before
                .defend_timer
                .expired(now, before.settings.turn_timeout_seconds);
            match action {
                Action::Attack { .. } if user_id != before.attacker_id => {
                    prop_assert_eq!(result, Err(RuleViolation::NotYourTurn));
                    prop_assert_eq!(&game, &before);
                }
                Action::Defend { .. } if user_id != before.defender_id && !defend_expired => {
                    prop_assert_eq!(result, Err(RuleViolation::NotYourTurn));
                    prop_assert_eq!(&game, &before);
                }
                Action::TakeAllCards if user_id != before.defender_id => {
                    prop_assert_eq!(result, Err(RuleViolation::NotYourTurn));
                    prop_assert_eq!(&game, &before);
                }
                _ => {}
            }
        }
    }

    /// Property: serialize then deserialize yields an identical game
    #[test]
    fn prop_serde_round_trip(
        players in player_count(),
        seed in any::<u64>(),
        steps in script(),
    ) {
        let mut game = fresh_game(players, seed);
        start_all(&mut game);
        let mut now = T0;
        for step in &steps {
            now += Duration::seconds(step.advance_secs);
            let (user_id, action) = step_action(&game, step);
            let _ = apply(&mut game, &user_id, &action, now);
            game.take_events();
        }

        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, game);
    }

    /// Property: the game starts exactly when the last player readies
    #[test]
    fn prop_start_after_last_ready(
        players in player_count(),
        seed in any::<u64>(),
        order in Just((0usize..6).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let mut game = fresh_game(players, seed);
        let ids: Vec<String> = order
            .iter()
            .filter(|&&i| i < players)
            .map(|&i| game.players[i].id.clone())
            .collect();

        for (n, id) in ids.iter().enumerate() {
            prop_assert!(!game.started);
            apply(&mut game, id, &Action::Ready, T0).unwrap();
            prop_assert_eq!(game.started, n + 1 == players);
            prop_assert_eq!(
                apply(&mut game, id, &Action::Ready, T0),
                Err(RuleViolation::UserAlreadyReady)
            );
        }
        prop_assert!(game.attack_timer.running);
        prop_assert_eq!(game.ready_voters.len(), players);
    }
}

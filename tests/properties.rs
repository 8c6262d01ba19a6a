use catch_the_eggs::sim::{
    Basket, FallingItem, GameEvent, GamePhase, GameState, ItemKind, Signal, TickInput,
    handle_signal, item_hits_basket, tick,
};
use glam::Vec2;
use proptest::prelude::*;

fn playing(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    handle_signal(&mut state, Signal::Start);
    state
}

fn kind_strategy() -> impl Strategy<Value = ItemKind> {
    prop::sample::select(ItemKind::ALL.to_vec())
}

/// Put an item right above the basket so the next tick catches it
fn drop_on_basket(state: &mut GameState, kind: ItemKind) {
    let id = state.next_entity_id();
    let x = state.basket.x;
    state.items.push(FallingItem {
        id,
        pos: Vec2::new(x, 84.0),
        kind,
        speed: 2.0,
        active: true,
    });
}

proptest! {
    #[test]
    fn score_never_negative(kinds in prop::collection::vec(
        prop::sample::select(vec![ItemKind::Normal, ItemKind::Blue, ItemKind::Golden, ItemKind::Poop]),
        1..60,
    )) {
        let mut state = playing(1);
        state.spawn_timer = f32::MIN;
        let mut expected: i64 = 0;

        for kind in kinds {
            drop_on_basket(&mut state, kind);
            tick(&mut state, &TickInput::default(), 0.0);
            let points = match kind {
                ItemKind::Normal => 1,
                ItemKind::Blue => 5,
                ItemKind::Golden => 10,
                _ => -10,
            };
            expected = (expected + points).max(0);
            prop_assert_eq!(state.score as i64, expected);
        }
    }

    #[test]
    fn reset_is_idempotent(seed in any::<u64>(), ticks in 0usize..200, chickens in 1u32..5) {
        let mut tuning = catch_the_eggs::Tuning::default();
        tuning.chicken_count = chickens;
        let mut state = GameState::with_tuning(seed, tuning);
        handle_signal(&mut state, Signal::Start);
        let input = TickInput { idle_mode: true, ..Default::default() };
        for _ in 0..ticks {
            tick(&mut state, &input, 0.05);
        }

        state.reset();
        let once = state.clone();
        state.reset();
        prop_assert_eq!(state, once);
    }

    #[test]
    fn clock_only_rises_on_extra_time(
        seed in any::<u64>(),
        dts in prop::collection::vec(0.0f32..0.2, 1..400),
    ) {
        let mut state = playing(seed);
        let input = TickInput { idle_mode: true, ..Default::default() };

        for dt in dts {
            if state.phase != GamePhase::Playing {
                break;
            }
            let before = state.remaining_time;
            tick(&mut state, &input, dt);
            let extra = state.events.iter().any(|e| matches!(
                e,
                GameEvent::ItemCaught { kind: ItemKind::ExtraTime, .. }
            ));
            if !extra {
                prop_assert!(state.remaining_time <= before);
            }
            prop_assert!(state.remaining_time >= 0.0);
        }
    }

    #[test]
    fn basket_stays_in_field(
        moves in prop::collection::vec((-1.0f32..1.0, 0.0f32..500.0), 1..100),
        pickups in prop::collection::vec(kind_strategy(), 0..10),
    ) {
        let mut state = playing(3);
        for kind in pickups {
            drop_on_basket(&mut state, kind);
        }
        for (direction, amount) in moves {
            handle_signal(&mut state, Signal::MoveBasket { direction, amount });
            tick(&mut state, &TickInput::default(), 0.3);
            if state.phase != GamePhase::Playing {
                break;
            }
            let half = state.basket_width() / 2.0;
            prop_assert!(state.basket.x >= half);
            prop_assert!(state.basket.x <= 800.0 - half);
        }
    }

    #[test]
    fn items_outside_basket_never_collide(
        basket_x in 40.0f32..760.0,
        offset in 40.01f32..400.0,
        y in -50.0f32..600.0,
        left in any::<bool>(),
    ) {
        let basket = Basket { x: basket_x, ..Basket::new(8.0) };
        let x = if left { basket_x - offset } else { basket_x + offset };
        prop_assert!(!item_hits_basket(Vec2::new(x, y), &basket, 80.0));
    }
}

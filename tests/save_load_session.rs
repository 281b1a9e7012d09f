mod helpers;

use helpers::{TestSaves, run_session};
use mystic_quest::{Battle, BattleAction, BattleState, Combatant, SaveSystem, SessionEnd};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_save_then_load_resumes_health() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &["1", "Ari", "1", "1", "3", "3"]);
    assert!(out.stdout.contains("Game state saved successfully."));
    assert_eq!(t.contents(), "Ari\n70\n");

    let out = run_session(&t.saves, &["2", "1", "3"]);
    assert!(out.stdout.contains("Game state loaded successfully."));
    let loaded = "Player: Ari, Health: 70, Treasures: 0\nEnemy: Goblin, Health: 50";
    assert!(out.stdout.contains(loaded));
    // A fresh goblin: 50 -> 30, player 70 -> 55.
    let after_attack = "Player: Ari, Health: 55, Treasures: 0\nEnemy: Goblin, Health: 30";
    assert!(out.stdout.contains(after_attack));
    assert_eq!(t.contents(), "Ari\n55\n");
    assert_eq!(out.end, SessionEnd::Exited);
}

#[test]
fn test_loaded_low_health_player_can_be_defeated() {
    let t = TestSaves::new();
    t.write("Ari\n15\n");

    let out = run_session(&t.saves, &["2", "1", "3"]);
    assert!(out.stdout.contains("Goblin attacks the player!"));
    assert!(out.stdout.contains("You have been defeated. Game over."));
    assert!(!out.stdout.contains("Health: 0, Treasures"));
    assert_eq!(out.end, SessionEnd::Exited);
}

#[test]
fn test_loading_a_downed_player_ends_immediately() {
    let t = TestSaves::new();
    t.write("Ari\n-20\n");

    let out = run_session(&t.saves, &["2", "3"]);
    let ended = "Game state loaded successfully.\nYou have been defeated. Game over.";
    assert!(out.stdout.contains(ended));
    assert!(!out.stdout.contains("Choose an action:"));
}

#[test]
fn test_missing_save_returns_to_menu() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &["2", "3"]);

    assert_eq!(out.stderr, "Error loading game: No saved game found.\n");
    assert_eq!(out.stdout.matches("Choose an option: ").count(), 2);
    assert_eq!(out.end, SessionEnd::Exited);
    assert!(!t.saves.has_save());
}

#[test]
fn test_failed_save_returns_to_menu() {
    let t = TestSaves::new();
    let blocker = t.dir.path().join("blocker");
    std::fs::write(&blocker, "file").unwrap();
    let saves = SaveSystem::new(blocker.join("game_state.txt"));

    let out = run_session(&saves, &["1", "Ari", "3", "3"]);
    assert!(out.stderr.starts_with("Error saving game: "));
    assert!(out.stdout.contains("You leave the battle."));
    assert!(out.stdout.ends_with("Thank you for playing Mystic Quest!\n"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_battle_state_survives_save_and_load(actions in prop::collection::vec(1i64..=2, 0..6)) {
        let t = TestSaves::new();
        let mut battle = Battle::new(Combatant::player("Ari"));
        for selector in actions {
            if battle.state().is_over() {
                break;
            }
            let action = BattleAction::from_selector(selector).unwrap();
            battle.resolve(action, &t.saves);
        }
        prop_assume!(!battle.state().is_over());

        let hp = battle.player().hp();
        let report = battle.resolve(BattleAction::SaveAndExit, &t.saves);
        prop_assert_eq!(report.state, BattleState::PlayerExited);

        let restored = t.saves.load_game().unwrap().into_player();
        prop_assert_eq!(restored.name(), "Ari");
        prop_assert_eq!(restored.hp(), hp);
        prop_assert_eq!(restored.treasures(), Some(0));
    }
}

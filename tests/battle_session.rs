mod helpers;

use helpers::{TestSaves, run_session};
use mystic_quest::input::ConsoleInput;
use mystic_quest::renderer::TextRenderer;
use mystic_quest::{GameLoop, SessionEnd};
use pretty_assertions::assert_eq;

#[test]
fn test_three_attacks_defeat_the_goblin() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &["1", "Ari", "1", "1", "1", "3"]);

    assert_eq!(out.end, SessionEnd::Exited);
    assert!(out.stdout.contains("Starting new game..."));
    let first_round = "Player: Ari, Health: 85, Treasures: 0\nEnemy: Goblin, Health: 30";
    let second_round = "Player: Ari, Health: 70, Treasures: 0\nEnemy: Goblin, Health: 10";
    assert!(out.stdout.contains(first_round));
    assert!(out.stdout.contains(second_round));
    // The killing blow is not answered.
    assert_eq!(out.stdout.matches("Goblin attacks the player!").count(), 2);
    assert_eq!(out.stdout.matches("Ari attacks the enemy!").count(), 3);
    assert!(out.stdout.contains("You defeated the enemy! Victory!"));
    assert!(out.stdout.ends_with("Thank you for playing Mystic Quest!\n"));
    assert_eq!(out.stderr, "");
    assert!(!t.saves.has_save());
}

#[test]
fn test_first_turn_transcript() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &["1", "Ari", "1"]);

    let expected = "\
1. Start Game
2. Load Game
3. Exit
Choose an option: Enter your name: Starting new game...
Player: Ari, Health: 100, Treasures: 0
Enemy: Goblin, Health: 50

Choose an action:
1. Attack
2. Collect Treasure
3. Save and Exit
Ari attacks the enemy!
Goblin attacks the player!
Player: Ari, Health: 85, Treasures: 0
Enemy: Goblin, Health: 30

Choose an action:
1. Attack
2. Collect Treasure
3. Save and Exit
";
    assert_eq!(out.stdout, expected);
    assert_eq!(out.end, SessionEnd::InputClosed);
}

#[test]
fn test_invalid_input_reprompts_without_spending_a_turn() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &["9", "1", "", "  Ari  Bold ", "7", "x", "2", "3"]);

    let rejected = concat!(
        "Invalid choice. Please try again.\n",
        "Invalid action. Try again.\n",
        "Invalid action. Try again.\n",
    );
    assert_eq!(out.stderr, rejected);
    assert!(out.stdout.contains("Collected a treasure! Total: 1"));
    assert!(out.stdout.contains("Player: Ari, Health: 100, Treasures: 1"));
    assert!(out.stdout.contains("Game state saved successfully."));
    assert_eq!(t.contents(), "Ari\n100\n");
}

#[test]
fn test_treasure_hunting_leaves_health_untouched() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &["1", "Ari", "2", "2", "2", "3", "3"]);

    assert!(out.stdout.contains("Collected a treasure! Total: 3"));
    let stats = "Player: Ari, Health: 100, Treasures: 3\nEnemy: Goblin, Health: 50";
    assert!(out.stdout.contains(stats));
    assert!(out.stdout.contains("You leave the battle."));
    // Treasures are not persisted.
    assert_eq!(t.contents(), "Ari\n100\n");
    assert_eq!(out.end, SessionEnd::Exited);
}

#[test]
fn test_closed_input_ends_session_quietly() {
    let t = TestSaves::new();
    let out = run_session(&t.saves, &[]);
    assert_eq!(out.end, SessionEnd::InputClosed);
    assert_eq!(out.stderr, "");

    let out = run_session(&t.saves, &["1"]);
    assert_eq!(out.end, SessionEnd::InputClosed);
    assert!(out.stdout.ends_with("Enter your name: "));
    assert!(!t.saves.has_save());
}

#[test]
fn test_non_utf8_input_is_an_invalid_choice() {
    let t = TestSaves::new();
    let input = ConsoleInput::new(&b"\xff\xfe\n3\n"[..]);
    let renderer = TextRenderer::new(Vec::new(), Vec::new(), false);
    let mut game = GameLoop::new(input, renderer, t.saves.clone());

    let end = game.run().expect("garbled input does not abort the session");
    assert_eq!(end, SessionEnd::Exited);

    let (out, err) = game.into_renderer().into_inner();
    assert_eq!(String::from_utf8(err).unwrap(), "Invalid choice. Please try again.\n");
    assert!(String::from_utf8(out)
        .unwrap()
        .ends_with("Thank you for playing Mystic Quest!\n"));
}

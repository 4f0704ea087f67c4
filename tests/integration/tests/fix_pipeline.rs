//! End-to-end tests for the fix pipeline.
//!
//! Simulates the rule layer of a resource-file lint run: several rules
//! propose corrections against one buffer, the patcher resolves
//! conflicts and applies the survivors, and the caller reports which
//! corrections were skipped.

use lokalint_fix::{Edit, EditBundle, apply_bundles};

// greeting = "Hello  world"
// 0-7: key, 8: ' ', 9: '=', 10: ' ', 11: '"', 12-16: Hello,
// 17-18: doubled space, 19-23: world, 24: '"'
const ENTRY: &str = "greeting = \"Hello  world\"";

/// Straight quotes become typographic quotes.
fn curly_quotes_rule() -> EditBundle {
    EditBundle::new(vec![
        Edit::replace(11, 1, "\u{201C}"),
        Edit::replace(24, 1, "\u{201D}"),
    ])
    .expect("quote edits never overlap")
}

/// Doubled spaces collapse to one.
fn doubled_space_rule() -> EditBundle {
    EditBundle::single(Edit::delete(17, 1))
}

/// Messages end with terminal punctuation, inserted before the
/// closing quote.
fn terminal_punctuation_rule(mark: &str) -> EditBundle {
    EditBundle::single(Edit::insert(24, mark))
}

mod multi_rule_run {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_conflicting_rules_all_apply() {
        let mut bundles = vec![
            curly_quotes_rule(),
            doubled_space_rule(),
            terminal_punctuation_rule("."),
        ];

        let result = apply_bundles(ENTRY, &mut bundles).unwrap();

        assert_eq!(result.content, "greeting = \u{201C}Hello world.\u{201D}");
        assert_eq!(result.applied, 3);
        assert_eq!(result.skipped, 0);
        assert!(bundles.iter().all(EditBundle::is_applied));
    }

    #[test]
    fn earlier_rule_wins_a_conflict() {
        let mut bundles = vec![
            terminal_punctuation_rule("."),
            terminal_punctuation_rule("!"),
        ];

        let result = apply_bundles(ENTRY, &mut bundles).unwrap();

        assert_eq!(result.content, "greeting = \"Hello  world.\"");
        assert!(bundles[0].is_applied());
        assert!(!bundles[1].is_applied());
    }

    #[test]
    fn priority_follows_submission_order_not_position() {
        // Same two corrections, opposite priority.
        let mut bundles = vec![
            terminal_punctuation_rule("!"),
            terminal_punctuation_rule("."),
        ];

        let result = apply_bundles(ENTRY, &mut bundles).unwrap();

        assert_eq!(result.content, "greeting = \"Hello  world!\"");
    }

    #[test]
    fn losing_bundle_drops_even_its_clean_edits() {
        let mut bundles = vec![
            terminal_punctuation_rule("?"),
            // Renames the key and adds "!": the "!" loses to the "?"
            // above, which takes the rename down with it.
            EditBundle::new(vec![Edit::replace(0, 8, "welcome"), Edit::insert(24, "!")])
                .unwrap(),
            curly_quotes_rule(),
        ];

        let result = apply_bundles(ENTRY, &mut bundles).unwrap();

        assert_eq!(
            result.content,
            "greeting = \u{201C}Hello  world?\u{201D}"
        );
        assert!(bundles[0].is_applied());
        assert!(!bundles[1].is_applied());
        assert!(bundles[2].is_applied());
        assert_eq!(result.applied, 2);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn skipped_corrections_are_reportable() {
        let mut bundles = vec![
            terminal_punctuation_rule("."),
            terminal_punctuation_rule("!"),
            doubled_space_rule(),
        ];

        apply_bundles(ENTRY, &mut bundles).unwrap();

        let skipped: Vec<usize> = bundles
            .iter()
            .enumerate()
            .filter(|(_, bundle)| !bundle.is_applied())
            .map(|(index, _)| index)
            .collect();

        assert_eq!(skipped, vec![1]);
    }

    #[test]
    fn fixing_is_idempotent_when_rules_go_quiet() {
        let mut bundles = vec![doubled_space_rule()];
        let first = apply_bundles(ENTRY, &mut bundles).unwrap();

        // A second pass where no rule fires leaves the buffer alone.
        let mut no_bundles: Vec<EditBundle> = Vec::new();
        let second = apply_bundles(&first.content, &mut no_bundles).unwrap();

        assert_eq!(second.content, first.content);
        assert!(!second.modified());
    }
}

mod rule_boundary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn corrections_arrive_as_serialized_edit_lists() {
        // A plugin rule ships its proposed correction as JSON.
        let json = r#"[
            { "position": 0, "delete_count": 8, "text": "welcome" },
            { "position": 24, "delete_count": 0, "text": "!" }
        ]"#;
        let mut bundles = vec![serde_json::from_str::<EditBundle>(json).unwrap()];

        let result = apply_bundles(ENTRY, &mut bundles).unwrap();

        assert_eq!(result.content, "welcome = \"Hello  world!\"");
        assert!(bundles[0].is_applied());
    }

    #[test]
    fn self_contradicting_correction_is_rejected_at_the_boundary() {
        let json = r#"[
            { "position": 11, "delete_count": 14, "text": "\"hi\"" },
            { "position": 17, "delete_count": 1, "text": "" }
        ]"#;

        assert!(serde_json::from_str::<EditBundle>(json).is_err());
    }

    #[test]
    fn malformed_correction_aborts_the_whole_run() {
        let mut bundles = vec![
            doubled_space_rule(),
            EditBundle::single(Edit::delete(1000, 5)),
        ];

        assert!(apply_bundles(ENTRY, &mut bundles).is_err());
    }
}

use semver_bump::analyzer::{classify, classify_commit};
use semver_bump::BumpLevel;

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_reference_scenarios() {
    let cases: Vec<(&str, Vec<&str>, BumpLevel)> = vec![
        ("feat simple", vec!["feat: add new feature"], BumpLevel::Minor),
        ("fix simple", vec!["fix: fix a bug"], BumpLevel::Patch),
        ("chore only", vec!["chore: housekeeping"], BumpLevel::None),
        (
            "breaking in body",
            vec!["chore: update\n\nBREAKING CHANGE: alters API"],
            BumpLevel::Major,
        ),
        (
            "exclamation breaking",
            vec!["feat!: big change that breaks things"],
            BumpLevel::Major,
        ),
        (
            "scoped fix",
            vec!["fix(parser): handle bug & edge case"],
            BumpLevel::Patch,
        ),
        (
            "feat with emoji",
            vec!["feat: add ✨ new feature"],
            BumpLevel::Minor,
        ),
        (
            "fix with emoji and special chars",
            vec!["fix(parser): handle 🐛 & ☠️"],
            BumpLevel::Patch,
        ),
        (
            "lowercase breaking change",
            vec!["refactor: reshape\n\nbreaking change: lower-case marker"],
            BumpLevel::Major,
        ),
    ];

    for (name, commits, want) in cases {
        assert_eq!(
            classify(&commits),
            want,
            "{}: classify({:?})",
            name,
            commits
        );
    }
}

// ============================================================================
// Breaking change detection
// ============================================================================

#[test]
fn test_breaking_marker_any_casing() {
    for marker in [
        "BREAKING CHANGE",
        "Breaking Change",
        "breaking CHANGE",
        "bReAkInG cHaNgE",
    ] {
        let commit = format!("docs: notes\n\n{}: api moved", marker);
        assert_eq!(classify([commit.as_str()]), BumpLevel::Major, "{}", marker);
    }
}

#[test]
fn test_breaking_marker_as_substring() {
    assert_eq!(
        classify(["chore: this is a nonbreaking changeset"]),
        BumpLevel::Major
    );
}

#[test]
fn test_breaking_marker_overrides_batch() {
    let commits = vec![
        "feat: one".to_string(),
        "fix: two".to_string(),
        "Free-form commit\n\nNote: Breaking Change for plugins".to_string(),
        "docs: three".to_string(),
    ];
    assert_eq!(classify(&commits), BumpLevel::Major);
}

#[test]
fn test_every_type_with_bang_is_major() {
    for t in [
        "feat", "fix", "chore", "docs", "style", "refactor", "perf", "test", "build", "ci",
    ] {
        let plain = format!("{}!: change", t);
        let scoped = format!("{}(core)!: change", t);
        assert_eq!(classify_commit(&plain), BumpLevel::Major, "{}", plain);
        assert_eq!(classify_commit(&scoped), BumpLevel::Major, "{}", scoped);
    }
}

#[test]
fn test_unknown_type_with_bang_is_none() {
    assert_eq!(classify(["revert!: undo everything"]), BumpLevel::None);
}

// ============================================================================
// Algebraic properties
// ============================================================================

fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_order_independence() {
    let batches: Vec<Vec<&'static str>> = vec![
        vec!["docs: a", "fix: b", "feat: c", "chore: d"],
        vec!["fix: a", "ci: b", "Merge branch 'x'"],
        vec!["feat: a", "refactor!: b", "fix: c"],
        vec!["style: a", "perf: b", "test: c", "build: d"],
    ];

    for batch in batches {
        let expected = classify(&batch);
        for permutation in permutations(&batch) {
            assert_eq!(classify(&permutation), expected, "{:?}", permutation);
        }
    }
}

#[test]
fn test_monotonic_when_adding_commits() {
    let pool = [
        "chore: a",
        "fix: b",
        "docs: c",
        "feat(x): d",
        "not conventional",
        "fix: e\n\nBREAKING CHANGE: f",
    ];

    let mut batch: Vec<&str> = Vec::new();
    let mut previous = classify(&batch);
    for commit in pool {
        batch.push(commit);
        let current = classify(&batch);
        assert!(current >= previous, "adding {:?} lowered the bump", commit);
        previous = current;
    }
    assert_eq!(previous, BumpLevel::Major);
}

#[test]
fn test_aggregate_is_max_of_individual() {
    let batch = ["docs: a", "fix(io): b", "style: c", "feat: d", "test: e"];
    let max = batch.iter().map(|c| classify_commit(c)).max().unwrap();
    assert_eq!(classify(batch), max);
}

// ============================================================================
// Unicode payloads
// ============================================================================

#[test]
fn test_unicode_matches_ascii_equivalent() {
    let pairs = [
        ("feat: add new feature", "feat: add ✨ new feature"),
        ("fix(parser): crash", "fix(parser): crash 💥 naïve café"),
        ("docs: readme", "docs: ドキュメント"),
        ("chore: deps\n\nbody", "chore: deps\n\nCorps du message é\u{301} 🎉"),
        ("feat!: api", "feat!: api ↯"),
    ];

    for (ascii, unicode) in pairs {
        assert_eq!(
            classify_commit(ascii),
            classify_commit(unicode),
            "{:?} vs {:?}",
            ascii,
            unicode
        );
    }
}

#[test]
fn test_scope_must_be_word_characters() {
    // Letters in any script count as word characters, emoji do not
    assert_eq!(classify_commit("feat(x): go"), BumpLevel::Minor);
    assert_eq!(classify_commit("feat(análisis): go"), BumpLevel::Minor);
    assert_eq!(classify_commit("feat(🚀): go"), BumpLevel::None);
    assert_eq!(classify_commit("fix(ui-🚀): go"), BumpLevel::None);

    // Emoji in the description are fine, and the footer still wins
    assert_eq!(classify_commit("feat(x): go 🚀"), BumpLevel::Minor);
    assert_eq!(
        classify_commit("feat(🚀): go\n\nBREAKING CHANGE: new launch API"),
        BumpLevel::Major
    );
}

// ============================================================================
// Anchoring and malformed headers
// ============================================================================

#[test]
fn test_header_must_start_the_subject() {
    for commit in [
        " feat: leading space",
        "\tfix: leading tab",
        "[skip ci] feat: prefixed",
        "Revert \"feat: something\"",
    ] {
        assert_eq!(classify_commit(commit), BumpLevel::None, "{:?}", commit);
    }
}

#[test]
fn test_malformed_headers_are_none() {
    for commit in [
        "feat:missing space",
        "feat : space before colon",
        "feat(scope with spaces): x",
        "FIX: upper case type",
        "feat",
        "",
    ] {
        assert_eq!(classify_commit(commit), BumpLevel::None, "{:?}", commit);
    }
}

use tennis_stats::player_names::{
    IdentityMatcher, MatchOutcome, OverrideStage, Roster, surname_initial_form, surname_of,
};

fn abbreviated(full_name: &str) -> String {
    // "Rafael Nadal" -> "Nadal R."
    surname_initial_form(full_name).expect("two-token name")
}

#[test]
fn test_unique_surnames_resolve_at_first_stage() {
    let names = [
        "Rafael Nadal",
        "Roger Federer",
        "Novak Djokovic",
        "Andy Murray",
        "Jamie Murray",
        "Stan Wawrinka",
    ];
    let roster = Roster::from_names(names);
    let matcher = IdentityMatcher::new(roster.clone());

    let unique: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| matcher.index().is_unique_surname(surname_of(name)))
        .collect();
    assert_eq!(unique.len(), 4);

    for name in unique {
        let outcome = matcher.resolve(&abbreviated(name));
        assert_eq!(outcome.canonical(), Some(name), "resolving {name}");
        assert_eq!(outcome.stage(), Some("unique_surname"), "resolving {name}");
    }
}

#[test]
fn test_shared_surnames_never_resolve_at_first_stage() {
    let roster = Roster::from_names([
        "Andy Murray",
        "Jamie Murray",
        "Mischa Zverev",
        "Alexander Zverev",
        "Bob Bryan",
        "Mike Bryan",
    ]);
    let matcher = IdentityMatcher::new(roster.clone());

    for name in roster.names() {
        let outcome = matcher.resolve(&abbreviated(name));
        assert_ne!(outcome.stage(), Some("unique_surname"), "resolving {name}");
    }
}

#[test]
fn test_surname_plus_initial_disambiguates() {
    let roster = Roster::from_names(["Andy Murray", "Jamie Murray", "Rafael Nadal"]);
    let matcher = IdentityMatcher::new(roster);

    let andy = matcher.resolve("Murray A.");
    assert_eq!(andy.canonical(), Some("Andy Murray"));
    assert_eq!(andy.stage(), Some("surname_initial"));

    let jamie = matcher.resolve("Murray J.");
    assert_eq!(jamie.canonical(), Some("Jamie Murray"));
    assert_eq!(jamie.stage(), Some("surname_initial"));
}

#[test]
fn test_hyphenated_double_surname() {
    let roster = Roster::from_names(["Rafael Nadal", "Juan Del Potro Gomez"]);
    let matcher = IdentityMatcher::new(roster);

    let outcome = matcher.resolve("Del Potro-Gomez J.");
    assert_eq!(outcome.canonical(), Some("Juan Del Potro Gomez"));
    assert_eq!(outcome.stage(), Some("hyphenated_surname"));
}

#[test]
fn test_builtin_overrides_hold_for_any_roster() {
    let rosters = [
        Roster::default(),
        Roster::from_names(["Rafael Nadal", "Roger Federer"]),
        Roster::from_names(["Juan Martin Del Potro", "Roberto Bautista Agut"]),
        // Competing entries the heuristics would otherwise pick.
        Roster::from_names(["Ricardo Bautista", "Rafael Nadal"]),
        Roster::from_names(["Maria Del Potro", "Rafael Nadal"]),
        Roster::from_names(["Maria Del Potro", "Ricardo Bautista", "Roberto Bautista Agut"]),
    ];

    for roster in rosters {
        let matcher = IdentityMatcher::new(roster.clone());

        let del_potro = matcher.resolve("Del Potro J.M.");
        assert_eq!(del_potro.canonical(), Some("Juan Martin Del Potro"), "roster {roster:?}");
        assert_eq!(del_potro.stage(), Some("override"), "roster {roster:?}");

        let bautista = matcher.resolve("Bautista R.");
        assert_eq!(bautista.canonical(), Some("Roberto Bautista Agut"), "roster {roster:?}");
        assert_eq!(bautista.stage(), Some("override"), "roster {roster:?}");
    }
}

#[test]
fn test_configured_overrides_cannot_replace_builtins() {
    let overrides = OverrideStage::with_extra([
        ("Bautista R.", "Someone Else"),
        ("Lopez F.", "Feliciano Lopez"),
    ]);
    let matcher = IdentityMatcher::with_overrides(Roster::default(), overrides);

    assert_eq!(
        matcher.resolve("Bautista R.").canonical(),
        Some("Roberto Bautista Agut")
    );
    assert_eq!(
        matcher.resolve("Lopez F.").canonical(),
        Some("Feliciano Lopez")
    );
}

#[test]
fn test_unknown_surname_is_no_match() {
    let roster = Roster::from_names(["Rafael Nadal", "Roger Federer", "Andy Murray", "Jamie Murray"]);
    let matcher = IdentityMatcher::new(roster);

    let outcome = matcher.resolve("Zzyzx Q.");
    assert_eq!(outcome, MatchOutcome::NoMatch);
    assert_eq!(outcome.to_string(), "No match");
}

#[test]
fn test_resolution_is_idempotent() {
    let roster = Roster::from_names([
        "Rafael Nadal",
        "Andy Murray",
        "Jamie Murray",
        "Juan Del Potro Gomez",
    ]);
    let opponents = [
        "Nadal R.",
        "Murray A.",
        "Murray J.",
        "Del Potro-Gomez J.",
        "Bautista R.",
        "Zzyzx Q.",
    ];
    let matcher = IdentityMatcher::new(roster.clone());

    let first = matcher.resolve_all(&opponents);
    let second = matcher.resolve_all(&opponents);
    let rebuilt = IdentityMatcher::new(roster).resolve_all(&opponents);

    assert_eq!(first, second);
    assert_eq!(first, rebuilt);
}

#[test]
fn test_end_to_end_scenario() {
    let roster = Roster::from_names(["Rafael Nadal", "Roger Federer", "Novak Djokovic"]);
    let matcher = IdentityMatcher::new(roster);

    let outcomes = matcher.resolve_all(&["Federer R.", "Djokovic N.", "Nadal R."]);
    let names: Vec<Option<&str>> = outcomes.iter().map(MatchOutcome::canonical).collect();
    assert_eq!(
        names,
        vec![
            Some("Roger Federer"),
            Some("Novak Djokovic"),
            Some("Rafael Nadal")
        ]
    );
    assert!(
        outcomes
            .iter()
            .all(|outcome| outcome.stage() == Some("unique_surname"))
    );
}

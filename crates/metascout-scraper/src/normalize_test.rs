use super::*;

// -----------------------------------------------------------------------
// normalize_platform
// -----------------------------------------------------------------------

#[test]
fn normalize_platform_maps_common_labels() {
    let cases = [
        ("PlayStation 5", "playstation-5"),
        ("PS5", "playstation-5"),
        ("ps4", "playstation-4"),
        ("PlayStation Vita", "playstation-vita"),
        ("Xbox Series X|S", "xbox-series-x"),
        ("Xbox One", "xbox-one"),
        ("Xbox 360", "xbox-360"),
        ("Nintendo Switch", "nintendo-switch"),
        ("Nintendo Switch 2", "nintendo-switch-2"),
        ("Wii U", "wii-u"),
        ("Wii", "wii"),
        ("Nintendo 3DS", "3ds"),
        ("Nintendo DS", "ds"),
        ("PC", "pc"),
        ("iOS (iPhone/iPad)", "ios"),
        ("Meta Quest", "meta-quest"),
    ];
    for (label, expected) in cases {
        assert_eq!(
            normalize_platform(Some(label)).as_deref(),
            Some(expected),
            "label {label:?}"
        );
    }
}

#[test]
fn normalize_platform_prefers_specific_rules_over_catch_alls() {
    assert_eq!(
        normalize_platform(Some("PlayStation 3")).as_deref(),
        Some("playstation-3")
    );
    assert_eq!(
        normalize_platform(Some("PlayStation")).as_deref(),
        Some("playstation")
    );
    assert_eq!(normalize_platform(Some("Xbox")).as_deref(), Some("xbox"));
}

#[test]
fn normalize_platform_is_idempotent_for_known_aliases() {
    for (aliases, canonical) in PLATFORM_RULES {
        for alias in *aliases {
            let once = normalize_platform(Some(alias));
            let twice = normalize_platform(once.as_deref());
            assert_eq!(once, twice, "alias {alias:?}");
        }
        assert_eq!(
            normalize_platform(Some(canonical)).as_deref(),
            Some(*canonical),
            "canonical id {canonical:?} must map to itself"
        );
    }
}

#[test]
fn normalize_platform_passes_unknown_labels_through() {
    assert_eq!(
        normalize_platform(Some("  Neo Geo Pocket ")).as_deref(),
        Some("Neo Geo Pocket")
    );
}

#[test]
fn normalize_platform_keeps_case_and_inner_spacing_of_unknown_labels() {
    assert_eq!(
        normalize_platform(Some("\tAtari  JAGUAR\n")).as_deref(),
        Some("Atari  JAGUAR")
    );
}

#[test]
fn normalize_platform_absent_or_blank_is_none() {
    assert!(normalize_platform(None).is_none());
    assert!(normalize_platform(Some("   ")).is_none());
}

#[test]
fn is_platform_token_only_accepts_canonical_ids() {
    assert!(is_platform_token("playstation-5"));
    assert!(is_platform_token("pc"));
    assert!(!is_platform_token("PS5"));
    assert!(!is_platform_token("elden-ring"));
}

// -----------------------------------------------------------------------
// parse_numeric_text and friends
// -----------------------------------------------------------------------

#[test]
fn parse_numeric_text_examples() {
    assert_eq!(parse_numeric_text(Some("78")), Some(78.0));
    assert_eq!(parse_numeric_text(Some("Based on 1,204 Ratings")), Some(1204.0));
    assert_eq!(parse_numeric_text(Some("78 Metascore")), Some(78.0));
    assert_eq!(parse_numeric_text(Some("8.4")), Some(8.4));
    assert_eq!(parse_numeric_text(Some("")), None);
    assert_eq!(parse_numeric_text(Some("N/A")), None);
    assert_eq!(parse_numeric_text(Some("tbd")), None);
    assert_eq!(parse_numeric_text(None), None);
}

#[test]
fn parse_numeric_text_rejects_multiple_decimal_points() {
    assert_eq!(parse_numeric_text(Some("1.2.3")), None);
    assert_eq!(parse_numeric_text(Some(".")), None);
}

#[test]
fn parse_critic_score_requires_whole_number_in_range() {
    assert_eq!(parse_critic_score(Some("96")), Some(96));
    assert_eq!(parse_critic_score(Some("0")), Some(0));
    assert_eq!(parse_critic_score(Some("100")), Some(100));
    assert_eq!(parse_critic_score(Some("101")), None);
    assert_eq!(parse_critic_score(Some("9.5")), None);
    assert_eq!(parse_critic_score(Some("tbd")), None);
}

#[test]
fn parse_user_score_keeps_decimal_scale() {
    assert_eq!(parse_user_score(Some("7.9")), Some(7.9));
    assert_eq!(parse_user_score(Some("10")), Some(10.0));
    assert_eq!(parse_user_score(Some("79")), None);
    assert_eq!(parse_user_score(Some("tbd")), None);
}

#[test]
fn parse_count_accepts_whole_numbers_only() {
    assert_eq!(parse_count(Some("Based on 1,204 Ratings")), Some(1204));
    assert_eq!(parse_count(Some("Based on 97 Critic Reviews")), Some(97));
    assert_eq!(parse_count(Some("1.5k")), None);
    assert_eq!(parse_count(Some("")), None);
}

// -----------------------------------------------------------------------
// normalize_date / clean_text
// -----------------------------------------------------------------------

#[test]
fn normalize_date_converts_known_formats_to_iso() {
    assert_eq!(
        normalize_date(Some("Feb 25, 2022")).as_deref(),
        Some("2022-02-25")
    );
    assert_eq!(
        normalize_date(Some("February 25, 2022")).as_deref(),
        Some("2022-02-25")
    );
    assert_eq!(
        normalize_date(Some("2022-02-25")).as_deref(),
        Some("2022-02-25")
    );
    assert_eq!(
        normalize_date(Some("02/25/2022")).as_deref(),
        Some("2022-02-25")
    );
    assert_eq!(
        normalize_date(Some("2022-02-25T10:00:00Z")).as_deref(),
        Some("2022-02-25")
    );
}

#[test]
fn normalize_date_keeps_unparseable_text_raw() {
    assert_eq!(normalize_date(Some("  TBA   2025 ")).as_deref(), Some("TBA 2025"));
    assert!(normalize_date(Some("  ")).is_none());
    assert!(normalize_date(None).is_none());
}

#[test]
fn clean_text_collapses_whitespace() {
    assert_eq!(
        clean_text("\n  Elden   Ring \t").as_deref(),
        Some("Elden Ring")
    );
    assert!(clean_text(" \n ").is_none());
}

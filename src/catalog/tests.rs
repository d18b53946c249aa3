use super::*;

fn spread(categories: &[&str]) -> Candidate {
    Candidate::new("spread")
        .with_name("main", "Test Product")
        .with_categories(categories.iter().copied())
}

#[test]
fn test_label_takes_most_specific_category() {
    let candidate = Candidate::new("1").with_categories([
        "Spreads",
        "Sweet Spreads",
        "Chocolate Spreads",
        "Hazelnut Chocolate Spreads",
    ]);

    assert_eq!(display_label(&candidate), "Hazelnut Chocolate Spreads");
}

#[test]
fn test_label_skips_namespaced_categories() {
    let candidate = spread(&[
        "Spreads",
        "en:chocolate-spreads",
        "Hazelnut Spreads",
        "fr:pates-a-tartiner",
    ]);

    assert_eq!(display_label(&candidate), "Hazelnut Spreads");
}

#[test]
fn test_label_skips_blank_categories_and_trims() {
    let candidate = spread(&["  Dairy  ", "   ", ""]);
    assert_eq!(display_label(&candidate), "Dairy");
}

#[test]
fn test_label_falls_back_to_primary_name() {
    let candidate = Candidate::new("2")
        .with_name("fr", "Pâte à tartiner")
        .with_name("main", "Nutella Spread")
        .with_categories(["en:spreads", "fr:produits-a-tartiner", "en:sweet-spreads"]);

    assert_eq!(display_label(&candidate), "Nutella Spread");
}

#[test]
fn test_label_falls_back_to_first_non_empty_name() {
    let candidate = Candidate::new("3")
        .with_name("de", "")
        .with_name("fr", "Pâte à tartiner")
        .with_name("en", "Spread")
        .with_categories(["en:spreads"]);

    assert_eq!(display_label(&candidate), "Pâte à tartiner");
}

#[test]
fn test_label_skips_empty_primary_name() {
    let candidate = Candidate::new("4")
        .with_name("main", "")
        .with_name("pl", "Krem orzechowy");

    assert_eq!(display_label(&candidate), "Krem orzechowy");
}

#[test]
fn test_label_empty_when_no_source() {
    assert_eq!(display_label(&Candidate::new("5")), "");

    let only_namespaced = Candidate::new("6").with_categories(["en:food", "pl:jedzenie"]);
    assert_eq!(display_label(&only_namespaced), "");
}

#[test]
fn test_label_custom_primary_tag() {
    let candidate = Candidate::new("7")
        .with_name("en", "Hazelnut spread")
        .with_name("pl", "Krem z orzechów");

    let policy = LabelPolicy::new("pl");
    assert_eq!(policy.display_label(&candidate), "Krem z orzechów");
}

#[test]
fn test_label_preferred_namespace() {
    let policy = LabelPolicy::default().with_preferred_namespace("pl");

    assert_eq!(
        policy.display_label(&spread(&[
            "Spreads",
            "en:chocolate-spreads",
            "fr:chocolat",
            "pl:czekolada"
        ])),
        "czekolada"
    );
    assert_eq!(
        policy.display_label(&spread(&["en:food", "fr:beurre", "PL:masło"])),
        "masło"
    );
    assert_eq!(
        policy.display_label(&spread(&["pl:jedzenie", "en:food", "Normal Category"])),
        "Normal Category"
    );
    assert_eq!(
        policy.display_label(&spread(&["en:spreads", "Pl:masło_orzechowe", "fr:beurre"])),
        "masło_orzechowe"
    );
    assert_eq!(
        policy.display_label(&spread(&["en:spreads", "pl:"])),
        "Test Product"
    );
}

#[test]
fn test_default_policy_ignores_locale_namespace() {
    assert_eq!(
        display_label(&spread(&["en:food", "fr:beurre", "pl:masło"])),
        "Test Product"
    );
}

#[test]
fn test_unique_names_dedups_in_order() {
    let candidate = Candidate::new("8")
        .with_name("main", "Nutella")
        .with_name("en", "Nutella")
        .with_name("pl", "")
        .with_name("fr", "Nutella pâte");

    assert_eq!(candidate.unique_names(), vec!["Nutella", "Nutella pâte"]);
}

#[test]
fn test_candidate_deserializes_with_missing_fields() {
    let json = r#"{"id": "abc", "names": [{"lang": "main", "text": "Milk"}]}"#;
    let candidate: Candidate = serde_json::from_str(json).expect("valid candidate json");

    assert_eq!(candidate.id, "abc");
    assert_eq!(candidate.names[0].text, "Milk");
    assert!(candidate.brand.is_empty());
    assert!(candidate.categories.is_empty());
    assert_eq!(candidate.base_score, 0.0);
}

#[test]
fn test_resolve_ancestors_multi_segment() {
    let (label, ancestors) = resolve_ancestors("Food > Beverages > Dairy > Milk");
    assert_eq!(label, "Milk");
    assert_eq!(ancestors, vec!["Food", "Beverages", "Dairy"]);
}

#[test]
fn test_resolve_ancestors_single_segment() {
    let (label, ancestors) = resolve_ancestors("Food");
    assert_eq!(label, "Food");
    assert!(ancestors.is_empty());
}

#[test]
fn test_resolve_ancestors_trims_and_drops_empty_segments() {
    let (label, ancestors) = resolve_ancestors("  Food >  > Spreads  > Chocolate Spreads ");
    assert_eq!(label, "Chocolate Spreads");
    assert_eq!(ancestors, vec!["Food", "Spreads"]);
}

#[test]
fn test_resolve_ancestors_empty_path() {
    assert_eq!(resolve_ancestors(""), (String::new(), Vec::new()));
    assert_eq!(resolve_ancestors(" > "), (String::new(), Vec::new()));
}

#[test]
fn test_ingest_taxonomy_builds_records() {
    let report = ingest_taxonomy([
        ("Chocolate Spreads", "Food > Spreads > Chocolate Spreads"),
        ("Cookies", "Food > Snacks > Cookies"),
        ("Milk", "Food > Beverages > Dairy > Milk"),
    ]);

    assert!(report.is_clean());
    assert_eq!(report.records.len(), 3);

    let spreads = &report.records[0];
    assert_eq!(spreads.name, "Chocolate Spreads");
    assert_eq!(spreads.ancestors, vec!["Food", "Spreads"]);
    assert_eq!(spreads.id, "chocolate_spreads");
    assert_eq!(report.records[2].ancestors, vec!["Food", "Beverages", "Dairy"]);
}

#[test]
fn test_ingest_taxonomy_skips_mismatch_without_aborting() {
    let report = ingest_taxonomy(vec![
        ("Cookies".to_string(), "Food > Snacks > Biscuits".to_string()),
        ("Milk".to_string(), "Food > Dairy > Milk".to_string()),
        ("Juice".to_string(), "".to_string()),
    ]);

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].name, "Milk");

    assert_eq!(report.skipped.len(), 2);
    assert_eq!(
        report.skipped[0].reason,
        TaxonomyError::LabelMismatch {
            expected: "Cookies".to_string(),
            resolved: "Biscuits".to_string(),
        }
    );
    assert_eq!(report.skipped[1].reason, TaxonomyError::EmptyPath);
}

#[test]
fn test_ingest_taxonomy_skips_empty_id() {
    let report = ingest_taxonomy([("日本茶", "Drinks > 日本茶")]);

    assert!(report.records.is_empty());
    assert_eq!(
        report.skipped[0].reason,
        TaxonomyError::EmptyId {
            name: "日本茶".to_string()
        }
    );
}

#[test]
fn test_category_slug() {
    assert_eq!(category_slug("Fruits & Vegetables"), "fruits_and_vegetables");
    assert_eq!(category_slug("Pâtes à tartiner"), "pates_a_tartiner");
    assert_eq!(category_slug("Plant-based (vegan)"), "plant-based_vegan");
}

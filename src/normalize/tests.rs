use super::*;

fn assert_normalizes(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        assert_eq!(normalize(input), *expected, "input: {:?}", input);
    }
}

#[test]
fn test_receipt_style_example() {
    assert_eq!(normalize("BorówkaAmeryk500g"), "borówka ameryk 500 g");
}

#[test]
fn test_acronym_followed_by_word() {
    assert_eq!(normalize("XMLHttpRequest"), "xml http request");
    assert_eq!(normalize("HTTPSConnection"), "https connection");
    assert_eq!(normalize("XMLDOMParser"), "xmldom parser");
    assert_eq!(normalize("JSONAPIResponse"), "jsonapi response");
}

#[test]
fn test_camel_case_splitting() {
    assert_normalizes(&[
        ("iPhone13Pro", "i phone 13 pro"),
        ("KrówkaŚmietankowa", "krówka śmietankowa"),
        ("MixedCASE", "mixed case"),
        ("lowerCASE", "lower case"),
        ("McDonald'sBigMac", "mc donald's big mac"),
    ]);
}

#[test]
fn test_central_european_letters() {
    assert_normalizes(&[
        ("ŻółćGęśią", "żółć gęśią"),
        ("ŁódźKraków", "łódź kraków"),
        ("ŚwiętaRóża", "święta róża"),
        ("ąćęłńóśźżĄĆĘŁŃÓŚŹŻ", "ąćęłńóśźż ąćęłńóśźż"),
    ]);
}

#[test]
fn test_accented_letters_outside_polish_split_too() {
    assert_eq!(normalize("NestléKitKat45g"), "nestlé kit kat 45 g");
}

#[test]
fn test_letter_digit_boundaries() {
    assert_normalizes(&[
        ("500g", "500 g"),
        ("250ml", "250 ml"),
        ("10kg5lb", "10 kg 5 lb"),
        ("abc123def456", "abc 123 def 456"),
        ("123Start", "123 start"),
        ("End456", "end 456"),
        ("123Middle456", "123 middle 456"),
    ]);
}

#[test]
fn test_punctuation_becomes_spaces() {
    assert_normalizes(&[
        ("Product,Name;Test", "product name test"),
        ("Test,;Multiple;,Punctuation", "test multiple punctuation"),
        ("iPhone13,Pro;500g", "i phone 13 pro 500 g"),
        ("XMLParser250ml,Test", "xml parser 250 ml test"),
        ("API,2.0;Version", "api 2.0 version"),
        (",;", ""),
    ]);

    assert!(!normalize("a,b;c,,;;d").contains([',', ';']));
}

#[test]
fn test_other_symbols_are_kept() {
    assert_eq!(normalize("Test@#$%^&*()Test"), "test@#$%^&*()test");
    assert_eq!(normalize("Test|+=~`Test"), "test|+=~`test");
}

#[test]
fn test_whitespace_is_collapsed_and_trimmed() {
    assert_normalizes(&[
        ("Multiple   Spaces", "multiple spaces"),
        ("  Leading  And  Trailing  ", "leading and trailing"),
        ("tab\tand\nnewline", "tab and newline"),
    ]);
}

#[test]
fn test_empty_and_absent_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t\n  "), "");
    assert_eq!(normalize_opt(None), "");
    assert_eq!(normalize_opt(Some("RedBull250ml")), "red bull 250 ml");
}

#[test]
fn test_single_characters() {
    assert_normalizes(&[("a", "a"), ("A", "a"), ("123", "123")]);
}

#[test]
fn test_idempotent() {
    let inputs = [
        "BorówkaAmeryk500g",
        "XMLHttpRequest",
        "iPhone13ProMax256GB",
        "RedBull250ml,Energy;Drink",
        "  ParówKurNatTarcz160g  ",
        "ŻółćGęśią",
        "İstanbulÇay2kg",
        "",
        "already normalized text 12 g",
        "Aℂ",
        "xℝy",
        "ϒAbc",
        "𝐀𝐁cDef",
        "ℂola2ℝ",
    ];

    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input: {:?}", input);
    }
}

#[test]
fn test_uncased_capitals_are_not_word_starts() {
    assert_normalizes(&[
        ("Aℂ", "aℂ"),
        ("aℂ", "aℂ"),
        ("fooℝbar", "fooℝbar"),
        ("ℂola500ml", "ℂola 500 ml"),
        ("XℂYz", "xℂyz"),
    ]);
}

#[test]
fn test_query_keeps_raw_and_canonical() {
    let query = Query::new("CocaCola500ml");
    assert_eq!(query.raw(), "CocaCola500ml");
    assert_eq!(query.canonical(), "coca cola 500 ml");
    assert_eq!(query.to_string(), "coca cola 500 ml");
    assert!(!query.is_empty());

    assert!(Query::new(" ;, ").is_empty());
}

use numeral_core::{decode, encode, ArabicValue, FormatError, RangeError, RomanNumeral};

#[test]
fn every_value_in_domain_round_trips() {
    for value in 1..=3999_i64 {
        let roman = encode(value).unwrap();
        assert_eq!(i64::from(decode(&roman).unwrap()), value, "roman {roman}");
    }
}

#[test]
fn encode_is_deterministic_and_canonical() {
    for value in 1..=3999_i64 {
        let first = encode(value).unwrap();
        let second = encode(value).unwrap();
        assert_eq!(first, second);
        assert!(!first.contains("IIII"));
        assert!(!first.contains("XXXX"));
        assert!(!first.contains("CCCC"));
        assert!(!first.contains("MMMM"));
    }
}

#[test]
fn encode_boundary_values() {
    assert_eq!(encode(1).unwrap(), "I");
    assert_eq!(encode(3999).unwrap(), "MMMCMXCIX");
    assert_eq!(encode(0), Err(RangeError::OutOfRange(0)));
    assert_eq!(encode(4000), Err(RangeError::OutOfRange(4000)));
    assert_eq!(ArabicValue::try_from(1.5), Err(RangeError::NotInteger));
    assert_eq!(ArabicValue::try_from(f64::NAN), Err(RangeError::NotInteger));
    assert_eq!(ArabicValue::try_from(42.0).unwrap().get(), 42);
}

#[test]
fn encode_subtractive_digraphs() {
    assert_eq!(encode(4).unwrap(), "IV");
    assert_eq!(encode(9).unwrap(), "IX");
    assert_eq!(encode(40).unwrap(), "XL");
    assert_eq!(encode(90).unwrap(), "XC");
    assert_eq!(encode(400).unwrap(), "CD");
    assert_eq!(encode(900).unwrap(), "CM");
    assert_eq!(encode(49).unwrap(), "XLIX");
}

#[test]
fn composite_value_converts_both_ways() {
    assert_eq!(encode(1994).unwrap(), "MCMXCIV");
    assert_eq!(decode("MCMXCIV"), Ok(1994));
    assert_eq!(decode("MMM"), Ok(3000));
}

#[test]
fn decode_rejection_set() {
    assert_eq!(decode(""), Err(FormatError::Empty));
    for text in ["IIII", "IXZ", "VX", "MMMM", "VIIII", "XVV", "mcmxciv", "IM"] {
        let err = decode(text).expect_err(text);
        assert_eq!(
            err.to_string(),
            "invalid or out-of-range Roman numeral format",
            "input `{text}`"
        );
    }
}

#[test]
fn decode_rejects_non_canonical_spelling_of_every_value() {
    // Appending a trailing `I` to a value ending in `III`, `IV` or `IX`
    // never yields a canonical numeral.
    for value in 1..=3999_i64 {
        let roman = encode(value).unwrap();
        if roman.ends_with("III") || roman.ends_with("IV") || roman.ends_with("IX") {
            let variant = format!("{roman}I");
            assert!(decode(&variant).is_err(), "`{variant}` accepted");
        }
    }
}

#[test]
fn roman_numeral_type_agrees_with_free_functions() {
    let parsed: RomanNumeral = "MMXXIV".parse().unwrap();
    assert_eq!(parsed.value().get(), 2024);
    assert_eq!(ArabicValue::new(2024).unwrap().to_roman(), parsed);
    assert_eq!("0042".parse::<ArabicValue>().unwrap().get(), 42);
}

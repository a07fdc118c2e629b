// Test the public parsing and arithmetic surface end to end

use meter_engine::{
    format_mixed, fraction_sum, parse_compound, parse_mixed, parse_terminal,
    proportion_to_fraction, MeterError, MeterTerminal, TempoIndication,
};

#[test]
fn test_terminal_round_trip_without_tempo() {
    for source in ["3/8", "2/4", "7/32", "12/16"] {
        let terminal = parse_terminal(source).expect("valid meter string");
        assert_eq!(terminal.to_string(), source);
    }
}

#[test]
fn test_terminal_tempo_qualifier() {
    let terminal = parse_terminal("slow 6/8").expect("valid meter string");
    assert_eq!(terminal, MeterTerminal::new(6, 8, Some(TempoIndication::Slow)));
}

#[test]
fn test_compound_meter_to_fractions() {
    assert_eq!(parse_compound("3/8+2/8"), vec![(3, 8), (2, 8)]);
    assert_eq!(parse_compound("5/8"), vec![(5, 8)]);
    // interior whitespace around terms is tolerated
    assert_eq!(parse_compound("3/8 + 2/8"), vec![(3, 8), (2, 8)]);
}

#[test]
fn test_mixed_meter_round_trip_through_format() {
    let (fractions, summed) = parse_mixed("3+2+5/8+3/4+2+1+4/16").expect("valid mixed meter");
    assert!(summed);
    assert_eq!(
        format_mixed(&fractions),
        vec![
            ("3+2+5".to_string(), 8),
            ("3".to_string(), 4),
            ("2+1+4".to_string(), 16)
        ]
    );
}

#[test]
fn test_mixed_meter_error_names_input() {
    let source = "3+2+5/8+3/4+2+1+4";
    match parse_mixed(source) {
        Err(MeterError::UnmatchedDenominator(original)) => assert_eq!(original, source),
        other => panic!("expected UnmatchedDenominator, got {:?}", other),
    }
}

#[test]
fn test_fraction_sum_of_parsed_compound() {
    // the sum of a compound meter keeps its written denominator
    let fractions = parse_compound("3/8+3/8");
    assert_eq!(fraction_sum(&fractions), (6, 8));
}

#[test]
fn test_proportion_to_fraction_best_fit() {
    assert_eq!(proportion_to_fraction(0.5), (1, 2));
    assert_eq!(proportion_to_fraction(0.333), (1, 3));
}

#[test]
fn test_terminal_serialization_round_trip() {
    let terminal = parse_terminal("fast 6/8").expect("valid meter string");
    let json = serde_json::to_string(&terminal).expect("serializes");
    let back: MeterTerminal = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, terminal);
}

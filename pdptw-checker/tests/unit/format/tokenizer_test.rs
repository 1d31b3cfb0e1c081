use super::*;

#[test]
fn can_parse_node_record() {
    let tokens = LineTokens::new(3, "5 42.5 65 -10 100 400 10 2 0");

    let record = NodeRecord::parse(&tokens).expect("cannot parse record");

    assert_eq!(
        record,
        NodeRecord {
            index: 5,
            location: (42.5, 65.),
            demand: -10,
            earliest: 100,
            latest: 400,
            service: 10,
            pickup_pair: 2,
            delivery_pair: 0,
        }
    );
    assert_eq!(record.declared_pair(), Some(2));
}

#[test]
fn can_accept_integral_float_values() {
    let tokens = LineTokens::new(1, "28.000 -3.0 1.5");

    assert_eq!(tokens.int(0, "value"), Ok(28));
    assert_eq!(tokens.int(1, "value"), Ok(-3));
    assert_eq!(tokens.int(2, "value").map_err(|err| err.code), Err(INVALID_NUMBER_CODE.to_string()));
}

parameterized_test! {can_reject_malformed_node_record, (line, expected_code, expected_cause), {
    let tokens = LineTokens::new(7, line);

    let error = NodeRecord::parse(&tokens).expect_err("no error returned");

    assert_eq!(error.code, expected_code);
    assert_eq!(error.cause, expected_cause);
    assert_eq!(error.details, Some(format!("line 7: '{line}'")));
}}

can_reject_malformed_node_record! {
    case01_short: ("1 0 0 10 0 100 0 0", SHORT_ROW_CODE, "node line has 8 fields, expected at least 9"),
    case02_non_numeric_demand: ("1 0 0 ten 0 100 0 0 4", INVALID_NUMBER_CODE, "cannot parse demand: 'ten'"),
    case03_negative_service: ("1 0 0 10 0 100 -5 0 4", INVALID_NUMBER_CODE, "service duration is negative: '-5'"),
    case04_negative_index: ("-1 0 0 10 0 100 5 0 4", INVALID_NUMBER_CODE, "node index is negative: '-1'"),
    case05_huge_service: ("1 0 0 10 0 100 4611686018427387904 0 4", OUT_OF_RANGE_CODE,
        "service duration is out of range: '4611686018427387904'"),
    case06_huge_latest: ("1 0 0 10 0 9223372036854775807 0 0 4", OUT_OF_RANGE_CODE,
        "latest time is out of range: '9223372036854775807'"),
    case07_huge_negative_demand: ("4 0 0 -1e15 0 100 0 1 0", OUT_OF_RANGE_CODE,
        "demand is out of range: '-1000000000000000'"),
    case08_min_earliest: ("1 0 0 10 -9223372036854775808 100 0 0 4", OUT_OF_RANGE_CODE,
        "earliest time is out of range: '-9223372036854775808'"),
}

#[test]
fn can_ignore_zero_declared_pair() {
    let pickup = NodeRecord::parse(&LineTokens::new(1, "1 0 0 10 0 100 0 0 0")).expect("cannot parse");
    let depot = NodeRecord::parse(&LineTokens::new(1, "0 0 0 0 0 100 0 3 4")).expect("cannot parse");

    assert_eq!(pickup.declared_pair(), None);
    assert_eq!(depot.declared_pair(), None);
}

parameterized_test! {can_parse_matrix_row, (line, size, expected), {
    let result = MatrixRow::parse(&LineTokens::new(1, line), size).map_err(|err| err.code);

    assert_eq!(result, expected);
}}

can_parse_matrix_row! {
    case01_valid: ("0 5 8", 3, Ok(vec![0, 5, 8])),
    case02_short: ("0 5", 3, Err(SHORT_ROW_CODE.to_string())),
    case03_long: ("0 5 8 9", 3, Err(SHORT_ROW_CODE.to_string())),
    case04_negative: ("0 -5 8", 3, Err(INVALID_NUMBER_CODE.to_string())),
    case05_non_numeric: ("0 x 8", 3, Err(INVALID_NUMBER_CODE.to_string())),
    case06_huge: ("0 4611686018427387904 8", 3, Err(OUT_OF_RANGE_CODE.to_string())),
    case07_max_allowed: ("0 1099511627776 8", 3, Ok(vec![0, MAX_FIELD_VALUE, 8])),
}

//! End-to-end checks of the variance scan through the public API.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stock_variance::dataset::{EXPECTED_ANSWER, HEADER, STOCK_DATA};
use stock_variance::scanner::{records, scan_shards, scan_text};
use stock_variance::{
    greatest_variance_date, scan_loop, scan_pipeline, ParseErrorKind, ScanError, Strategy,
};

fn table(rows: &[(&str, Decimal, Decimal)]) -> Vec<String> {
    std::iter::once(HEADER.to_string())
        .chain(
            rows.iter()
                .map(|(date, open, close)| format!("{date},{open},0,0,{close},0,{close}")),
        )
        .collect()
}

/// Deterministic pseudo-random prices, no external RNG needed.
fn generated(len: usize, seed: u64) -> Vec<(String, Decimal, Decimal)> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % 500) as i64
    };
    (0..len)
        .map(|i| {
            let open = Decimal::new(3000 + next(), 2);
            let close = Decimal::new(3000 + next(), 2);
            (format!("day-{i:03}"), open, close)
        })
        .collect()
}

#[test]
fn sample_table_answer() {
    assert_eq!(greatest_variance_date(&STOCK_DATA).unwrap(), EXPECTED_ANSWER);
    assert_eq!(scan_loop(&STOCK_DATA).unwrap().variance(), dec!(0.43));
}

#[test]
fn result_dominates_every_record() {
    for seed in 1..20 {
        let rows = generated(40, seed);
        let refs: Vec<_> = rows.iter().map(|(d, o, c)| (d.as_str(), *o, *c)).collect();
        let text = table(&refs);

        let loop_best = scan_loop(&text).unwrap();
        let pipeline_best = scan_pipeline(&text).unwrap();
        assert_eq!(loop_best, pipeline_best, "seed {seed}");
        assert_eq!(scan_shards(&text, 7).unwrap(), loop_best, "seed {seed}");

        for parsed in records(&text) {
            let (index, record) = parsed.unwrap();
            assert!(record.variance() <= loop_best.variance());
            if record.variance() == loop_best.variance() {
                assert!(index >= loop_best.index, "earlier tie at {index}");
            }
        }
    }
}

#[test]
fn tie_break_prefers_first_row() {
    let text = table(&[("A", dec!(10), dec!(12)), ("B", dec!(5), dec!(7))]);
    for strategy in [Strategy::Loop, Strategy::Pipeline] {
        assert_eq!(strategy.scan(&text).unwrap().date(), "A");
    }
}

#[test]
fn single_row_is_the_answer() {
    let text = table(&[("lonely", dec!(1.00), dec!(1.00))]);
    assert_eq!(greatest_variance_date(&text).unwrap(), "lonely");
}

#[test]
fn header_only_input() {
    let text = HEADER.to_string();
    assert_eq!(
        scan_text(&text, Strategy::Loop).unwrap_err(),
        ScanError::EmptyInput
    );
}

#[test]
fn short_row_is_a_parse_error() {
    let text = format!("{HEADER}\n2012-03-13,32.24,32.69");
    match scan_text(&text, Strategy::Pipeline) {
        Err(ScanError::Parse(err)) => {
            assert_eq!(err.line, 2);
            assert!(matches!(err.kind, ParseErrorKind::FieldCount { found: 3, .. }));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn fabricated_header_is_ignored() {
    let text = format!("2099-01-01,0,0,0,100000,0,0\n{}", STOCK_DATA[1..].join("\n"));
    assert_eq!(
        scan_text(&text, Strategy::Loop).unwrap().date(),
        EXPECTED_ANSWER
    );
}

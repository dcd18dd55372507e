//! Property-based tests for the wire grammar and renderer totality.

use calificar::prelude::*;
use proptest::prelude::*;

proptest! {
    /// Parsing then re-serializing a matrix literal reproduces its values.
    #[test]
    fn matrix_literal_round_trips(
        rows in 1usize..8,
        cols in 1usize..8,
        seed in any::<i64>(),
    ) {
        let values: Vec<Vec<i64>> = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| seed.wrapping_mul(31).wrapping_add((r * cols + c) as i64))
                    .collect()
            })
            .collect();
        let matrix = IntMatrix::from_rows(values.clone()).unwrap();
        let parsed = IntMatrix::parse_literal(&matrix.to_literal()).unwrap();
        prop_assert_eq!(&parsed, &matrix);
        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                prop_assert_eq!(parsed.get(r, c), *value);
            }
        }
    }

    /// The derived operation count is exactly 2*m*n*k for positive dims.
    #[test]
    fn derived_operations_match_formula(m in 1u32..512, n in 1u32..512, k in 1u32..512) {
        let raw = format!("m\t{m}\nn\t{n}\nk\t{k}");
        let record = TestRecord::parse_and_enrich(&raw).unwrap();
        let expected = 2 * i64::from(m) * i64::from(n) * i64::from(k);
        prop_assert_eq!(record.statistics.get("operations"), Some(&expected));
    }

    /// Both renderers are total over any record the parser accepts.
    #[test]
    fn renderers_never_panic_on_parsed_records(
        m in 1u32..6,
        n in 1u32..6,
        k in 1u32..6,
        with_output in any::<bool>(),
        with_locations in any::<bool>(),
    ) {
        let mut raw = format!("result\tfail\nm\t{m}\nn\t{n}\nk\t{k}");
        let grid = |rows: u32, cols: u32, cell: &str| {
            let row = vec![cell; cols as usize].join(" ");
            format!("[{}]", vec![row; rows as usize].join("; "))
        };
        if with_output {
            raw.push_str(&format!("\noutput\t{}", grid(m, n, "7")));
        }
        if with_locations {
            raw.push_str(&format!("\nlocations\t{}", grid(m, n, "1")));
        }
        let record = TestRecord::parse_and_enrich(&raw).unwrap();
        for target in [RenderTarget::Terminal, RenderTarget::Web] {
            let doc = explain(&record, target);
            let _ = render_terminal(&doc, &StyleMap::ansi());
            let _ = render_web(&doc);
        }
    }
}

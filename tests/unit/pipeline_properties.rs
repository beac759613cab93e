//! Property tests for the pipeline stages.

use motion_tables::pipeline::{easing, DeltaDelayTable};
use proptest::prelude::*;

proptest! {
    /// Any sequence whose net displacement stays under the threshold is
    /// returned unchanged, bit for bit.
    #[test]
    fn easing_identity_below_threshold(
        values in prop::collection::vec(-1.0f64..1.0, 2..50)
    ) {
        // |last - first| <= 2 here, so a threshold of 5 always short-circuits
        let eased = easing::apply(&values, 5.0);
        prop_assert_eq!(eased, values);
    }

    /// Significant motion keeps both endpoints and stays inside the
    /// envelope spanned by them, monotonically.
    #[test]
    fn easing_endpoints_and_envelope(
        mut values in prop::collection::vec(-100.0f64..100.0, 2..50),
        displacement in prop::sample::select(vec![-40.0f64, -3.0, 0.5, 12.0, 90.0]),
    ) {
        let start = values[0];
        let end = start + displacement;
        let n = values.len();
        values[n - 1] = end;

        let eased = easing::apply(&values, 0.01);

        prop_assert_eq!(eased[0], start);
        prop_assert!((eased[n - 1] - end).abs() < 1e-9);

        let (lo, hi) = (start.min(end), start.max(end));
        for &v in &eased {
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }

        for pair in eased.windows(2) {
            if displacement > 0.0 {
                prop_assert!(pair[1] >= pair[0] - 1e-9);
            } else {
                prop_assert!(pair[1] <= pair[0] + 1e-9);
            }
        }
    }

    /// The deltas telescope: their sum is always the net step travel.
    #[test]
    fn delta_conservation(
        rows in prop::collection::vec((-1000i64..1000, 0.01f64..1.0), 2..40)
    ) {
        let steps: Vec<i64> = rows.iter().map(|r| r.0).collect();
        let mut t = 0.0;
        let times: Vec<f64> = rows.iter().map(|r| { t += r.1; t }).collect();

        let table = DeltaDelayTable::compute(&steps, &times, None).unwrap();

        let sum: i64 = table.delta_steps.iter().sum();
        prop_assert_eq!(sum, steps[steps.len() - 1] - steps[0]);
        prop_assert_eq!(table.len(), steps.len() - 1);
    }

    /// Under the unclamped policy an interval has a zero delay exactly when
    /// it issues no steps.
    #[test]
    fn zero_delta_iff_zero_delay(
        rows in prop::collection::vec((-1000i64..1000, 0.01f64..1.0), 2..40)
    ) {
        let steps: Vec<i64> = rows.iter().map(|r| r.0).collect();
        let mut t = 0.0;
        let times: Vec<f64> = rows.iter().map(|r| { t += r.1; t }).collect();

        let table = DeltaDelayTable::compute(&steps, &times, None).unwrap();

        for (delta, delay) in table.delta_steps.iter().zip(&table.delay_us) {
            // |delta| < 2000 and dt >= 0.01 s keeps every real delay >= 5 us
            prop_assert_eq!(*delta == 0, *delay == 0);
        }
    }
}

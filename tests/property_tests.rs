use proptest::prelude::*;
use vista::Vista;

proptest! {
    #[test]
    fn prop_keep_yields_satisfying_subsequence(
        xs in prop::collection::vec(any::<i32>(), 0..200),
        m in 1i32..10,
    ) {
        let kept: Vec<i32> = xs.iter().copied().keep(move |n| n % m == 0).to_vec();
        let expected: Vec<i32> = xs.iter().copied().filter(|n| n % m == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_select_maps_every_element_in_order(
        xs in prop::collection::vec(any::<i32>(), 0..200),
    ) {
        let out: Vec<i64> = xs.iter().select(|n| i64::from(*n) * 3).to_vec();
        prop_assert_eq!(out.len(), xs.len());
        for (input, output) in xs.iter().zip(&out) {
            prop_assert_eq!(i64::from(*input) * 3, *output);
        }
    }

    #[test]
    fn prop_fused_and_composed_null_filters_agree(
        slots in prop::collection::vec(prop::option::of(any::<i32>()), 0..200),
    ) {
        let fused: Vec<&i32> = slots.iter().non_null_ref().to_vec();
        let composed: Vec<&i32> = slots
            .iter()
            .select(|slot| slot.as_ref())
            .non_null()
            .to_vec();
        prop_assert_eq!(fused, composed);
    }

    #[test]
    fn prop_first_or_default_matches_linear_search(
        xs in prop::collection::vec(any::<i16>(), 0..100),
        low in any::<i16>(),
    ) {
        let picked = xs.iter().copied().first_or_default_by(move |n| *n < low);
        let expected = xs.iter().copied().find(|n| *n < low).unwrap_or_default();
        prop_assert_eq!(picked, expected);
    }
}

use bar_chart_rs::core::{
    BarKind, BarLayoutOptions, ValueRange, Viewport, compute_bar_layout, index_at,
};
use proptest::prelude::*;

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 2..40)
}

proptest! {
    #[test]
    fn index_at_stays_within_bar_range(
        pointer_x in prop::num::f64::ANY,
        canvas_width in 1.0f64..4_000.0,
        bar_count in 1usize..200
    ) {
        let index = index_at(pointer_x, canvas_width, bar_count).expect("some index");
        prop_assert!(index < bar_count);
    }

    #[test]
    fn bars_never_overlap_even_when_emphasized(
        values in values_strategy(),
        width in 50.0f64..2_000.0,
        height in 50.0f64..1_000.0,
        spacing in 0.1f64..6.0,
        selected_percent in 100.0f64..300.0,
        selected_seed in 0usize..64
    ) {
        let range = ValueRange::from_values(&values).expect("range");
        let options = BarLayoutOptions {
            spacing_px: spacing,
            selected_scale_percent: selected_percent,
            ..BarLayoutOptions::default()
        };
        let selected = Some(selected_seed % values.len());
        let layout = compute_bar_layout(
            &values,
            range,
            Viewport::new(width, height),
            options,
            selected,
        )
        .expect("layout");

        for pair in layout.bars.windows(2) {
            prop_assert!(pair[0].rect.right() <= pair[1].rect.x + 1e-9);
        }
    }

    #[test]
    fn layout_is_idempotent(
        values in values_strategy(),
        width in 10.0f64..2_000.0,
        height in 10.0f64..1_000.0,
        selected in prop::option::of(0usize..40)
    ) {
        let range = ValueRange::from_values(&values).expect("range");
        let canvas = Viewport::new(width, height);
        let options = BarLayoutOptions::default();
        let first = compute_bar_layout(&values, range, canvas, options, selected).expect("first");
        let second = compute_bar_layout(&values, range, canvas, options, selected).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scaled_bars_fit_inside_canvas(
        values in values_strategy(),
        width in 10.0f64..2_000.0,
        height in 10.0f64..1_000.0
    ) {
        let range = ValueRange::from_values(&values).expect("range");
        let layout = compute_bar_layout(
            &values,
            range,
            Viewport::new(width, height),
            BarLayoutOptions::default(),
            None,
        )
        .expect("layout");

        for bar in layout.bars.iter().filter(|bar| bar.kind != BarKind::Placeholder) {
            prop_assert!(bar.rect.y >= -1e-9);
            prop_assert!(bar.rect.bottom() <= height + 1e-9);
            prop_assert!(bar.rect.right() <= width + 1e-9);
        }
    }
}

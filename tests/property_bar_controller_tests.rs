use bar_chart_rs::controllers::BarController;
use bar_chart_rs::core::{
    CategoryScale, Chart, ChartConfig, ChartData, ChartOptions, Color, Dataset, LinearScale,
    Viewport,
};
use bar_chart_rs::render::RenderFrame;
use proptest::prelude::*;

fn chart_for(values: Vec<f64>) -> Chart {
    let labels = (0..values.len()).map(|index| format!("label{index}"));
    let data = ChartData::new(vec![Dataset::new(values)]).with_labels(labels);
    let x_scale = CategoryScale::new(0.0, 800.0, data.labels.len().max(1)).expect("x scale");
    let y_scale = LinearScale::fit(&data, 0.0, 600.0).expect("y scale");

    Chart::new(
        data,
        ChartConfig::default(),
        ChartOptions::default().with_axes("x", "y"),
    )
    .with_scale("x", x_scale)
    .with_scale("y", y_scale)
}

proptest! {
    #[test]
    fn element_count_tracks_data_length(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..48),
        resized in prop::collection::vec(-1_000.0f64..1_000.0, 0..48)
    ) {
        let mut chart = chart_for(values.clone());
        let controller = BarController::new(&mut chart, 0).expect("controller");
        prop_assert_eq!(chart.data.datasets[0].meta_data.len(), values.len());

        chart.data.datasets[0].data = resized.clone();
        chart.data.labels = (0..resized.len()).map(|index| index.to_string()).collect();
        controller.build_or_update_elements(&mut chart).expect("reconcile");
        prop_assert_eq!(chart.data.datasets[0].meta_data.len(), resized.len());
        prop_assert!(chart.data.datasets[0]
            .meta_data
            .iter()
            .enumerate()
            .all(|(position, element)| element.index == position));
    }

    #[test]
    fn drawn_bars_are_finite_and_ordered(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..64)
    ) {
        let mut chart = chart_for(values.clone());
        let controller = BarController::new(&mut chart, 0).expect("controller");
        controller.update(&mut chart).expect("update");

        let mut frame = RenderFrame::new(Viewport::new(800, 600));
        controller.draw(&mut chart, 1.0, &mut frame).expect("draw");

        prop_assert_eq!(frame.rects.len(), values.len());
        prop_assert!(frame.validate().is_ok());
        prop_assert!(frame.rects.windows(2).all(|pair| pair[0].x < pair[1].x));
    }

    #[test]
    fn hover_round_trip_restores_resolved_style(
        values in prop::collection::vec(-100.0f64..100.0, 1..16),
        red in any::<u8>(),
        green in any::<u8>(),
        blue in any::<u8>(),
        width in 0.0f64..8.0
    ) {
        let mut chart = chart_for(values.clone());
        chart.data.datasets[0].background_color = Some(Color::rgb(red, green, blue).into());
        chart.data.datasets[0].border_width = Some(width.into());
        let controller = BarController::new(&mut chart, 0).expect("controller");
        controller.update(&mut chart).expect("update");

        let index = values.len() - 1;
        let before = chart.data.datasets[0].meta_data[index].model.clone();
        controller.set_hover_style(&mut chart, index).expect("hover");
        controller.remove_hover_style(&mut chart, index).expect("unhover");

        prop_assert_eq!(&chart.data.datasets[0].meta_data[index].model, &before);
    }
}

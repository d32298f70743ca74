use bar_chart_rs::controllers::BarController;
use bar_chart_rs::core::{
    CategoryScale, Chart, ChartType, Color, Dataset, LinearScale, RectangleDefaults, StyleValue,
};
use bar_chart_rs::ChartError;

const CHART_JSON: &str = r##"{
    "type": "bar",
    "data": {
        "labels": ["a", "b"],
        "datasets": [
            {
                "label": "sales",
                "data": [1, 2],
                "backgroundColor": ["rgb(255, 0, 0)", "#00ff00"],
                "borderWidth": 2,
                "hoverBorderColor": "rgba(0, 0, 0, 0.5)"
            },
            { "type": "line", "data": [3, 4], "xAxisID": "x2" }
        ]
    },
    "options": {
        "elements": { "rectangle": { "backgroundColor": "rgb(1, 2, 3)" } },
        "scales": { "xAxes": [{ "id": "x" }], "yAxes": [{ "id": "y" }] }
    }
}"##;

#[test]
fn chart_definition_loads_from_json() {
    let chart = Chart::from_json(CHART_JSON).expect("valid chart json");

    assert_eq!(chart.config.chart_type, ChartType::Bar);
    assert_eq!(chart.data.labels, vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(chart.options.scales.x_axes[0].id, "x");

    let sales = &chart.data.datasets[0];
    assert_eq!(sales.label.as_deref(), Some("sales"));
    assert_eq!(
        sales.background_color,
        Some(StyleValue::PerIndex(vec![
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0)
        ]))
    );
    assert_eq!(sales.border_width, Some(StyleValue::Single(2.0)));
    assert_eq!(
        sales.hover_border_color,
        Some(StyleValue::Single(Color::rgba(0, 0, 0, 0.5)))
    );
    assert!(sales.meta_data.is_empty());

    let line = &chart.data.datasets[1];
    assert_eq!(line.chart_type, Some(ChartType::Line));
    assert_eq!(line.x_axis_id.as_deref(), Some("x2"));
}

#[test]
fn missing_rectangle_fields_use_defaults() {
    let chart = Chart::from_json(CHART_JSON).expect("valid chart json");
    let rectangle = chart.options.elements.rectangle;

    assert_eq!(rectangle.background_color, Color::rgb(1, 2, 3));
    assert_eq!(rectangle.border_color, RectangleDefaults::default().border_color);
    assert_eq!(rectangle.border_width, 0.0);
}

#[test]
fn loaded_chart_drives_controllers_once_scales_are_attached() {
    let mut chart = Chart::from_json(CHART_JSON).expect("valid chart json");
    chart.set_scale("x", CategoryScale::new(0.0, 200.0, 2).expect("x scale"));
    chart.set_scale("y", LinearScale::fit(&chart.data, 0.0, 100.0).expect("y scale"));

    let controller = BarController::new(&mut chart, 0).expect("controller");
    controller.update(&mut chart).expect("update");

    assert_eq!(controller.get_bar_count(&chart), 1);
    let bars = &chart.data.datasets[0].meta_data;
    assert_eq!(bars[0].model.background_color, Color::rgb(255, 0, 0));
    assert_eq!(bars[1].model.background_color, Color::rgb(0, 255, 0));
    assert_eq!(bars[1].model.border_width, 2.0);
    assert_eq!(bars[1].model.dataset_label.as_deref(), Some("sales"));
    assert_eq!(chart.scale_ids().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn invalid_color_in_definition_is_reported() {
    let json = r#"{ "data": { "datasets": [{ "backgroundColor": "blurple" }] } }"#;
    let err = Chart::from_json(json).expect_err("unknown color");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn runtime_elements_are_not_serialized() {
    let mut dataset = Dataset::new(vec![1.0]).with_label("runtime");
    dataset
        .meta_data
        .push(bar_chart_rs::elements::RectangleElement::new(0, 0));

    let value = serde_json::to_value(&dataset).expect("serialize");
    assert!(value.get("metaData").is_none());
    assert_eq!(value["label"], "runtime");
    assert!(value.get("xAxisID").is_none());
}

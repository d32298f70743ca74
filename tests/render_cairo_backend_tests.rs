#![cfg(feature = "cairo-backend")]

use bar_chart_rs::ChartError;
use bar_chart_rs::controllers::BarController;
use bar_chart_rs::core::{
    CategoryScale, Chart, ChartConfig, ChartData, ChartOptions, Dataset, LinearScale, Viewport,
};
use bar_chart_rs::render::{CairoContextRenderer, CairoRenderer, RenderFrame, Renderer};
use cairo::{Context, Format, ImageSurface};

fn bar_frame() -> RenderFrame {
    let data = ChartData::new(vec![Dataset::new(vec![3.0, -1.0, 2.0]).with_border(
        bar_chart_rs::core::Color::rgb(0, 0, 0),
        vec![1.0, 0.0, 1.0],
    )])
    .with_labels(["a", "b", "c"]);
    let y_scale = LinearScale::fit(&data, 0.0, 240.0).expect("y scale");
    let mut chart = Chart::new(
        data,
        ChartConfig::default(),
        ChartOptions::default().with_axes("x", "y"),
    )
    .with_scale("x", CategoryScale::new(0.0, 320.0, 3).expect("x scale"))
    .with_scale("y", y_scale);

    let controller = BarController::new(&mut chart, 0).expect("controller");
    controller.update(&mut chart).expect("update");
    let mut frame = RenderFrame::new(Viewport::new(320, 240));
    controller.draw(&mut chart, 1.0, &mut frame).expect("draw");
    frame
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 240).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_fills_every_bar() {
    let mut renderer = CairoRenderer::new(320, 240).expect("renderer");
    renderer.render(&bar_frame()).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_filled, 3);
    assert_eq!(stats.borders_stroked, 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(320, 240).expect("renderer");
    let surface = ImageSurface::create(Format::ARgb32, 320, 240).expect("surface");
    let context = Context::new(&surface).expect("context");

    renderer
        .render_on_cairo_context(&context, &bar_frame())
        .expect("render on external context");
    assert_eq!(renderer.last_stats().rects_filled, 3);
}

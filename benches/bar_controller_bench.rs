use bar_chart_rs::controllers::BarController;
use bar_chart_rs::core::{
    CategoryScale, Chart, ChartConfig, ChartData, ChartOptions, Dataset, LinearScale, Viewport,
};
use bar_chart_rs::render::RenderFrame;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bar_chart(datasets: usize, values: usize) -> Chart {
    let data = ChartData::new(
        (0..datasets)
            .map(|dataset| {
                Dataset::new(
                    (0..values)
                        .map(|index| ((index * 7 + dataset * 13) % 200) as f64 - 100.0)
                        .collect(),
                )
            })
            .collect(),
    )
    .with_labels((0..values).map(|index| format!("c{index}")));
    let y_scale = LinearScale::fit(&data, 0.0, 1080.0).expect("valid y scale");

    Chart::new(
        data,
        ChartConfig::default(),
        ChartOptions::default().with_axes("x", "y"),
    )
    .with_scale("x", CategoryScale::new(0.0, 1920.0, values).expect("valid x scale"))
    .with_scale("y", y_scale)
}

fn bench_update_10k(c: &mut Criterion) {
    let mut chart = bar_chart(1, 10_000);
    let controller = BarController::new(&mut chart, 0).expect("controller");

    c.bench_function("bar_update_10k", |b| {
        b.iter(|| {
            controller
                .update(black_box(&mut chart))
                .expect("update should succeed");
        })
    });
}

fn bench_draw_grouped_4x2k(c: &mut Criterion) {
    let mut chart = bar_chart(4, 2_000);
    let controllers: Vec<BarController> = (0..4)
        .map(|index| BarController::new(&mut chart, index).expect("controller"))
        .collect();
    for controller in &controllers {
        controller.update(&mut chart).expect("update");
    }

    c.bench_function("bar_draw_grouped_4x2k", |b| {
        b.iter(|| {
            let mut frame = RenderFrame::new(Viewport::new(1920, 1080));
            for controller in &controllers {
                controller
                    .draw(&mut chart, black_box(0.5), &mut frame)
                    .expect("draw should succeed");
            }
            black_box(frame.rects.len())
        })
    });
}

criterion_group!(benches, bench_update_10k, bench_draw_grouped_4x2k);
criterion_main!(benches);

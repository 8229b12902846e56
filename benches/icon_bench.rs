use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use icondraw::{
    BBox, Canvas, Figure, GradAngular, GradDiagonal, PI, Point, Primitive, Region, Rgba, Scalar,
    Scene, gradient_fill,
};

const SIZE: usize = 256;

fn gradient_bench(c: &mut Criterion) {
    let extent = SIZE as Scalar;
    let center = Point::new(extent / 2.0, extent / 2.0);

    let mut group = c.benchmark_group("gradient_fill");
    group.throughput(Throughput::Elements((SIZE * SIZE) as u64));

    let diagonal = GradDiagonal::new(
        extent,
        Rgba::opaque(102, 126, 234),
        Rgba::opaque(118, 75, 162),
    );
    group.bench_function("diagonal", |b| {
        b.iter(|| {
            let mut canvas = Canvas::filled(SIZE, Rgba::opaque(0, 0, 0));
            gradient_fill(&mut canvas, Region::Full, black_box(&diagonal));
            canvas
        })
    });

    let angular = GradAngular::new(
        center,
        extent / 2.0,
        Rgba::opaque(135, 206, 250),
        Rgba::opaque(65, 105, 225),
        PI / 4.0,
    );
    group.bench_function("angular", |b| {
        b.iter(|| {
            let mut canvas = Canvas::filled(SIZE, Rgba::opaque(255, 255, 255));
            gradient_fill(
                &mut canvas,
                Region::Circle {
                    center,
                    radius: extent / 2.0,
                },
                black_box(&angular),
            );
            canvas
        })
    });
}

fn compose_bench(c: &mut Criterion) {
    let extent = SIZE as Scalar;
    let mut scene = Scene::new();
    scene.push(Figure::fill(
        Primitive::Ellipse(BBox::new((20.0, 20.0), (extent - 20.0, extent - 20.0))),
        Rgba::opaque(65, 105, 225),
    ));
    scene.push(
        Figure::fill(
            Primitive::RoundedRect {
                bbox: BBox::new((40.0, 40.0), (extent - 40.0, extent - 40.0)),
                radius: extent * 0.1,
            },
            Rgba::new(255, 255, 255, 40),
        )
        .with_stroke(Rgba::opaque(255, 255, 255), 4.0),
    );
    scene.push(Figure::stroke(
        Primitive::Arc {
            bbox: BBox::new((60.0, 60.0), (extent - 60.0, extent - 60.0)),
            start: 90.0,
            end: 270.0,
        },
        Rgba::opaque(255, 255, 255),
        3.0,
    ));
    scene.push(Figure::stroke(
        Primitive::Line(Point::new(0.0, extent / 2.0), Point::new(extent, extent / 2.0)),
        Rgba::new(255, 255, 255, 128),
        2.0,
    ));

    let mut group = c.benchmark_group("scene");
    group.bench_function("draw", |b| {
        b.iter(|| {
            let mut canvas = Canvas::filled(SIZE, Rgba::opaque(0, 0, 0));
            black_box(&scene).draw(&mut canvas);
            canvas
        })
    });
}

criterion_group!(icon, gradient_bench, compose_bench);
criterion_main!(icon);

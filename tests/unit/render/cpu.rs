use super::*;
use crate::foundation::core::{Point, Rect};
use crate::render::backend::execute_plan;

fn canvas(side: u32) -> Canvas {
    Canvas {
        width: side,
        height: side,
    }
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    frame.pixel(x, y).unwrap()
}

#[test]
fn fill_rect_covers_exact_pixels() {
    let mut plan = FramePlan::new(canvas(8), 1.0);
    plan.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, 8.0, 8.0),
        color: Rgba8::WHITE,
    });
    plan.push(DrawOp::FillRect {
        rect: Rect::new(2.0, 2.0, 4.0, 4.0),
        color: Rgba8::BLACK,
    });

    let mut backend = CpuBackend::new();
    let frame = execute_plan(&mut backend, &plan, true).unwrap();
    assert_eq!((frame.width, frame.height), (8, 8));
    assert_eq!(px(&frame, 0, 0), [255, 255, 255, 255]);
    assert_eq!(px(&frame, 2, 2), [0, 0, 0, 255]);
    assert_eq!(px(&frame, 3, 3), [0, 0, 0, 255]);
    assert_eq!(px(&frame, 4, 4), [255, 255, 255, 255]);
}

#[test]
fn device_scale_maps_logical_units() {
    let mut plan = FramePlan::new(canvas(16), 2.0);
    plan.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, 4.0, 4.0),
        color: Rgba8::opaque(255, 0, 0),
    });
    let mut backend = CpuBackend::new();
    let frame = execute_plan(&mut backend, &plan, true).unwrap();
    assert_eq!(px(&frame, 7, 7), [255, 0, 0, 255]);
    assert_eq!(px(&frame, 8, 8), [0, 0, 0, 0]);
}

#[test]
fn later_passes_layer_over_earlier_ones() {
    let mut base = FramePlan::new(canvas(10), 1.0);
    base.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        color: Rgba8::BLACK,
    });
    let mut top = FramePlan::new(canvas(10), 1.0);
    top.push(DrawOp::FillCircle {
        center: Point::new(5.0, 5.0),
        radius: 3.0,
        color: Rgba8::WHITE,
    });

    let mut backend = CpuBackend::new();
    execute_plan(&mut backend, &base, true).unwrap();
    let frame = execute_plan(&mut backend, &top, false).unwrap();
    assert_eq!(px(&frame, 5, 5), [255, 255, 255, 255]);
    assert_eq!(px(&frame, 0, 0), [0, 0, 0, 255]);

    // A reset discards everything painted before.
    let frame = execute_plan(&mut backend, &top, true).unwrap();
    assert_eq!(px(&frame, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn image_op_stretches_and_applies_opacity() {
    let image = Arc::new(PreparedImage {
        width: 1,
        height: 1,
        rgba8_premul: Arc::new(vec![0, 0, 255, 255]),
    });
    let mut plan = FramePlan::new(canvas(10), 1.0);
    plan.push(DrawOp::Image {
        image: image.clone(),
        rect: Rect::new(2.0, 2.0, 8.0, 8.0),
        opacity: 1.0,
    });
    let mut backend = CpuBackend::new();
    let frame = execute_plan(&mut backend, &plan, true).unwrap();
    assert_eq!(px(&frame, 5, 5), [0, 0, 255, 255]);
    assert_eq!(px(&frame, 0, 0), [0, 0, 0, 0]);

    let mut plan = FramePlan::new(canvas(10), 1.0);
    plan.push(DrawOp::Image {
        image,
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        opacity: 0.5,
    });
    let frame = execute_plan(&mut backend, &plan, true).unwrap();
    let [_, _, b, a] = px(&frame, 5, 5);
    assert!((120..=136).contains(&a), "alpha {a}");
    assert_eq!(b, a);
}

#[test]
fn mismatched_plan_canvas_is_rejected() {
    let mut backend = CpuBackend::new();
    backend.reset_surface(canvas(4)).unwrap();
    let err = backend
        .exec_plan(&FramePlan::new(canvas(5), 1.0))
        .unwrap_err();
    assert!(matches!(err, QrPaintError::SurfaceUnavailable(_)), "{err}");
}

#[test]
fn oversized_surface_is_unavailable() {
    let mut backend = CpuBackend::new();
    let err = backend
        .reset_surface(Canvas {
            width: 70_000,
            height: 10,
        })
        .unwrap_err();
    assert!(matches!(err, QrPaintError::SurfaceUnavailable(_)), "{err}");
}

fn outline(radii: crate::geometry::CornerRadii) -> FramePlan {
    let mut plan = FramePlan::new(canvas(20), 1.0);
    plan.push(DrawOp::RoundedSquare {
        path: crate::geometry::rounded_rect_path(4.0, 2.0, 2.0, 14.0, radii),
        line_width: 4.0,
        color: Rgba8::BLACK,
        fill: false,
    });
    plan
}

#[test]
fn zero_radius_outline_keeps_square_corners() {
    let mut backend = CpuBackend::new();
    let frame = execute_plan(
        &mut backend,
        &outline(crate::geometry::CornerRadii::default()),
        true,
    )
    .unwrap();
    assert_eq!(px(&frame, 2, 2), [0, 0, 0, 255]);
    assert_eq!(px(&frame, 15, 15), [0, 0, 0, 255]);
    assert_eq!(px(&frame, 10, 10), [0, 0, 0, 0]);
}

#[test]
fn rounded_outline_clears_its_corners() {
    let mut backend = CpuBackend::new();
    let frame = execute_plan(
        &mut backend,
        &outline(crate::geometry::CornerRadii::Uniform(5.0)),
        true,
    )
    .unwrap();
    assert_eq!(px(&frame, 2, 2)[3], 0);
    // Straight edges are still fully covered.
    assert_eq!(px(&frame, 9, 2), [0, 0, 0, 255]);
}

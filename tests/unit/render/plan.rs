use super::*;

#[test]
fn bounds_cover_strokes_and_shapes() {
    let circle = DrawOp::FillCircle {
        center: Point::new(10.0, 10.0),
        radius: 3.0,
        color: Rgba8::BLACK,
    };
    assert_eq!(circle.bounds(), Rect::new(7.0, 7.0, 13.0, 13.0));

    let ellipse = DrawOp::FillEllipse {
        center: Point::new(50.0, 40.0),
        radii: Vec2::new(20.0, 10.0),
        color: Rgba8::WHITE,
    };
    assert_eq!(ellipse.bounds(), Rect::new(30.0, 30.0, 70.0, 50.0));

    let path = crate::geometry::rounded_rect_path(2.0, 0.0, 0.0, 10.0, 0.0.into());
    let square = DrawOp::RoundedSquare {
        path,
        line_width: 2.0,
        color: Rgba8::BLACK,
        fill: false,
    };
    let b = square.bounds();
    assert!((b.x0 - 0.0).abs() < 1e-9 && (b.x1 - 10.0).abs() < 1e-9, "{b:?}");
}

#[test]
fn count_filters_by_kind() {
    let canvas = Canvas {
        width: 4,
        height: 4,
    };
    let mut plan = FramePlan::new(canvas, 1.0);
    plan.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, 4.0, 4.0),
        color: Rgba8::WHITE,
    });
    plan.push(DrawOp::FillRect {
        rect: Rect::new(1.0, 1.0, 2.0, 2.0),
        color: Rgba8::BLACK,
    });
    assert_eq!(plan.count(DrawOpKind::FillRect), 2);
    assert_eq!(plan.count(DrawOpKind::Image), 0);
}

use squircle::*;

#[test]
fn empty() {
    let pb = PathBuilder::new();
    assert!(pb.finish().is_none());
}

#[test]
fn line() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    pb.line_to(30.0, 40.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(10.0, 20.0, 30.0, 40.0).unwrap());
    assert_eq!(path.fill_rule(), FillRule::Winding);
    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(10.0, 20.0)),
            PathSegment::LineTo(Point::from_xy(30.0, 40.0)),
        ]
    );

    assert_eq!(
        format!("{:?}", path),
        "Path { segments: \"M 10 20 L 30 40\", \
         bounds: Rect { left: 10.0, top: 20.0, right: 30.0, bottom: 40.0 } }"
    );
}

#[test]
fn only_move() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    assert!(pb.finish().is_none());
}

#[test]
fn no_move_before_line() {
    let mut pb = PathBuilder::new();
    pb.line_to(30.0, 40.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.bounds(), Rect::from_ltrb(0.0, 0.0, 30.0, 40.0).unwrap());
    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
            PathSegment::LineTo(Point::from_xy(30.0, 40.0)),
        ]
    );
}

#[test]
fn no_move_before_close() {
    let mut pb = PathBuilder::new();
    pb.close();
    assert!(pb.finish().is_none());
}

#[test]
fn double_close() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 10.0);
    pb.line_to(20.0, 10.0);
    pb.line_to(20.0, 20.0);
    pb.close();
    pb.close();
    let path = pb.finish().unwrap();

    assert_eq!(path.len(), 4);
    assert_eq!(path.commands().last(), Some(&PathCommand::Close));
}

#[test]
fn double_move_to() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    pb.move_to(30.0, 40.0);
    pb.line_to(50.0, 60.0);
    let path = pb.finish().unwrap();

    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(30.0, 40.0)),
            PathSegment::LineTo(Point::from_xy(50.0, 60.0)),
        ]
    );
}

#[test]
fn relative_commands() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 10.0);
    pb.rel_line_to(10.0, 0.0);
    pb.rel_cubic_to(5.0, 0.0, 10.0, 5.0, 10.0, 10.0);
    pb.close();
    let path = pb.finish().unwrap();

    assert!(path.commands()[1].is_relative());
    assert_eq!(path.commands()[0].coords(), Some(Coords::Absolute));
    assert_eq!(path.commands()[3].coords(), None);

    assert_eq!(
        path.segments().collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(10.0, 10.0)),
            PathSegment::LineTo(Point::from_xy(20.0, 10.0)),
            PathSegment::CubicTo(
                Point::from_xy(25.0, 10.0),
                Point::from_xy(30.0, 15.0),
                Point::from_xy(30.0, 20.0)
            ),
            PathSegment::Close,
        ]
    );

    assert_eq!(path.start_point(), Point::from_xy(10.0, 10.0));
    assert_eq!(path.end_point(), Point::from_xy(10.0, 10.0));
    assert_eq!(path.bounds(), Rect::from_ltrb(10.0, 10.0, 30.0, 20.0).unwrap());
}

#[test]
fn auto_close() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(10.0, 0.0);
    pb.line_to(10.0, 10.0);
    pb.close();
    let path = pb.finish().unwrap();

    let mut iter = path.segments();
    iter.set_auto_close(true);
    assert_eq!(
        iter.collect::<Vec<_>>(),
        &[
            PathSegment::MoveTo(Point::from_xy(0.0, 0.0)),
            PathSegment::LineTo(Point::from_xy(10.0, 0.0)),
            PathSegment::LineTo(Point::from_xy(10.0, 10.0)),
            PathSegment::LineTo(Point::from_xy(0.0, 0.0)),
            PathSegment::Close,
        ]
    );
}

#[test]
fn arc_bounds() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    // A half circle bulging below the chord.
    pb.arc_to(
        Arc::circular(10.0, ArcSize::Small, SweepDirection::CounterClockwise),
        20.0,
        0.0,
    );
    let path = pb.finish().unwrap();

    let bounds = path.bounds();
    assert!(bounds.left().abs() < 1e-4);
    assert!(bounds.top().abs() < 1e-4);
    assert!((bounds.right() - 20.0).abs() < 1e-4);
    assert!((bounds.bottom() - 10.0).abs() < 1e-4);
}

#[test]
fn svg_data() {
    let mut pb = PathBuilder::new();
    pb.set_fill_rule(FillRule::EvenOdd);
    pb.move_to(10.0, 20.0);
    pb.rel_line_to(5.0, 0.0);
    pb.arc_to(Arc::circular(5.0, ArcSize::Small, SweepDirection::Clockwise), 20.0, 25.0);
    pb.rel_cubic_to(0.0, 1.0, 0.0, 2.0, -1.5, 3.0);
    pb.close();
    let path = pb.finish().unwrap();

    assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    assert_eq!(
        path.to_string(),
        "M 10 20 l 5 0 A 5 5 0 0 1 20 25 c 0 1 0 2 -1.5 3 Z"
    );
}

#[test]
fn negative_zero_is_written_as_zero() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.rel_line_to(-0.0, 5.0);
    let path = pb.finish().unwrap();

    assert_eq!(path.to_string(), "M 0 0 l 0 5");
}

#[test]
fn arcs_to_cubics() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.rel_arc_to(Arc::circular(10.0, ArcSize::Small, SweepDirection::Clockwise), 10.0, 10.0);
    // Zero radius arcs are lines.
    pb.arc_to(Arc::circular(0.0, ArcSize::Small, SweepDirection::Clockwise), 10.0, 20.0);
    // Coincident endpoints draw nothing.
    pb.rel_arc_to(Arc::circular(5.0, ArcSize::Large, SweepDirection::Clockwise), 0.0, 0.0);
    pb.close();
    let path = pb.finish().unwrap();

    let cubics = path.to_cubics().unwrap();
    let segments: Vec<_> = cubics.segments().collect();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0], PathSegment::MoveTo(Point::from_xy(0.0, 0.0)));
    match segments[1] {
        PathSegment::CubicTo(p1, p2, p) => {
            let k = 10.0 * 0.5522848;
            assert!(p1.equals_within_tolerance(Point::from_xy(k, 0.0), 1e-3));
            assert!(p2.equals_within_tolerance(Point::from_xy(10.0, 10.0 - k), 1e-3));
            assert_eq!(p, Point::from_xy(10.0, 10.0));
        }
        _ => panic!("expected a cubic, got {:?}", segments[1]),
    }
    assert_eq!(segments[2], PathSegment::LineTo(Point::from_xy(10.0, 20.0)));
    assert_eq!(segments[3], PathSegment::Close);
    assert!(cubics.commands().iter().all(|c| !c.is_relative()));
}

#[test]
fn clear() {
    let mut pb = PathBuilder::new();
    pb.move_to(10.0, 20.0);
    pb.line_to(30.0, 40.0);
    let path = pb.finish().unwrap();

    let mut pb = path.clear();
    assert!(pb.is_empty());
    assert_eq!(pb.last_point(), None);
    pb.line_to(1.0, 2.0);
    let path = pb.finish().unwrap();
    assert_eq!(path.start_point(), Point::zero());
}

use squircle::*;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
}

fn assert_point_close(a: Point, b: Point) {
    assert!(a.equals_within_tolerance(b, 1e-3), "{:?} != {:?}", a, b);
}

// Straight segments as (from, to) pairs in absolute coordinates.
fn lines(path: &Path) -> Vec<(Point, Point)> {
    let mut lines = Vec::new();
    let mut iter = path.segments();
    loop {
        let from = iter.last_point();
        match iter.next() {
            Some(PathSegment::LineTo(to)) => lines.push((from, to)),
            Some(_) => {}
            None => break,
        }
    }

    lines
}

#[test]
fn scenario_uniform_smoothed() {
    let path = generate(150.0, 150.0, CornerRadius::uniform(24.0), 0.8, true, true).unwrap();

    assert_eq!(path.fill_rule(), FillRule::EvenOdd);
    assert_eq!(path.len(), 18);
    assert_point_close(path.start_point(), Point::from_xy(106.8, 0.0));

    let lines = lines(&path);
    assert_eq!(lines.len(), 4);
    for (from, to) in &lines {
        // Connectors are axis aligned.
        assert_close((to.x - from.x).abs() + (to.y - from.y).abs(), 63.6);
    }

    // Each connector starts where the previous corner ends.
    assert_point_close(lines[0].0, Point::from_xy(150.0, 43.2));
    assert_point_close(lines[0].1, Point::from_xy(150.0, 106.8));
    assert_point_close(lines[1].0, Point::from_xy(106.8, 150.0));
    assert_point_close(lines[1].1, Point::from_xy(43.2, 150.0));
    assert_point_close(lines[2].0, Point::from_xy(0.0, 106.8));
    assert_point_close(lines[2].1, Point::from_xy(0.0, 43.2));
    assert_point_close(lines[3].0, Point::from_xy(43.2, 0.0));
    assert_point_close(lines[3].1, Point::from_xy(106.8, 0.0));
}

#[test]
fn scenario_competing_corners() {
    let params = SquircleParams::new(100.0, 100.0)
        .with_corner_radius(CornerRadius::new(60.0, 60.0, 0.0, 0.0))
        .with_corner_smoothing(0.0);

    let corners = params.corner_params().unwrap();
    assert_close(corners[Corner::TopLeft].corner_radius, 50.0);
    assert_close(corners[Corner::TopLeft].p, 50.0);
    assert_close(corners[Corner::TopRight].corner_radius, 50.0);
    assert_close(corners[Corner::TopRight].p, 50.0);
    assert!(!corners[Corner::BottomRight].is_rounded());
    assert!(!corners[Corner::BottomLeft].is_rounded());

    let path = params.to_path().unwrap();
    // Sharp corners add nothing, so only two corners are emitted.
    assert_eq!(path.len(), 12);
    assert_point_close(path.start_point(), Point::from_xy(50.0, 0.0));

    let lines = lines(&path);
    assert_point_close(lines[0].1, Point::from_xy(100.0, 100.0));
    assert_point_close(lines[1].1, Point::from_xy(0.0, 100.0));
    assert_point_close(lines[2].1, Point::from_xy(0.0, 50.0));
}

#[test]
fn smoothing_is_clamped() {
    let clamped = generate(120.0, 80.0, CornerRadius::uniform(20.0), 1.5, true, true).unwrap();
    let max = generate(120.0, 80.0, CornerRadius::uniform(20.0), 1.0, true, true).unwrap();
    assert_eq!(clamped, max);

    let clamped = generate(120.0, 80.0, CornerRadius::uniform(20.0), -0.5, true, true).unwrap();
    let min = generate(120.0, 80.0, CornerRadius::uniform(20.0), 0.0, true, true).unwrap();
    assert_eq!(clamped, min);
}

#[test]
fn closed_outline() {
    let radii = [
        CornerRadius::uniform(16.0),
        CornerRadius::new(40.0, 8.0, 0.0, 25.0),
        CornerRadius::new(0.0, 0.0, 90.0, 0.0),
    ];

    for radius in radii {
        for preserve in [true, false] {
            let path = generate(200.0, 90.0, radius, 0.7, preserve, true).unwrap();
            assert_eq!(path.commands().last(), Some(&PathCommand::Close));

            // The pen is back at the start before the contour is closed,
            // so auto closing adds no extra line.
            let mut iter = path.segments();
            iter.set_auto_close(true);
            let segments: Vec<_> = iter.collect();
            assert_eq!(segments.last(), Some(&PathSegment::Close));
            assert_eq!(segments.len(), path.len());
        }
    }
}

#[test]
fn corners_meet_edges() {
    let path = generate(200.0, 90.0, CornerRadius::new(40.0, 8.0, 0.0, 25.0), 0.7, true, true).unwrap();

    // Each corner ends exactly where the next straight edge continues.
    for (from, to) in lines(&path) {
        assert!(
            (from.x - to.x).abs() < 1e-3 || (from.y - to.y).abs() < 1e-3,
            "{:?} -> {:?} is not axis aligned",
            from,
            to
        );
    }
}

#[test]
fn square_has_congruent_corners() {
    let params = SquircleParams::new(100.0, 100.0)
        .with_corner_radius(CornerRadius::uniform(20.0))
        .with_corner_smoothing(0.6);

    let corners = params.corner_params().unwrap();
    for (_, p) in corners.iter() {
        assert_eq!(*p, corners[Corner::TopLeft]);
    }

    let bounds = params.to_path().unwrap().bounds();
    assert_close(bounds.left(), 0.0);
    assert_close(bounds.top(), 0.0);
    assert_close(bounds.right(), 100.0);
    assert_close(bounds.bottom(), 100.0);
}

#[test]
fn arc_measure_decreases_with_smoothing() {
    let mut prev = f32::MAX;
    for i in 0..=20 {
        let params = SquircleParams::new(80.0, 80.0)
            .with_corner_radius(CornerRadius::uniform(30.0))
            .with_corner_smoothing(i as f32 / 20.0);
        let corner = params.corner_params().unwrap()[Corner::TopRight];
        assert!(corner.arc_measure <= prev);
        assert!(corner.p <= 40.0 + 1e-4);
        prev = corner.arc_measure;
    }
}

#[test]
fn budget_is_respected() {
    let (w, h) = (160.0, 60.0);
    let radius = CornerRadius::new(70.0, 20.0, 45.0, 5.0);
    let normalized = normalize(w, h, &radius);

    for preserve in [true, false] {
        let params = SquircleParams::new(w, h)
            .with_corner_radius(radius)
            .with_corner_smoothing(1.0)
            .with_preserve_smoothing(preserve);

        let corners = params.corner_params().unwrap();
        for corner in Corner::ALL {
            let p = corners[corner].p;
            assert!(p <= normalized[corner].budget + 1e-4);

            for adj in corner.adjacent() {
                let run = p + corners[adj.corner].p;
                assert!(run <= adj.side.length(w, h) + 1e-3);
            }
        }
    }
}

#[test]
fn reduced_smoothing() {
    let params = SquircleParams::new(100.0, 100.0)
        .with_corner_radius(CornerRadius::uniform(40.0))
        .with_corner_smoothing(1.0)
        .with_preserve_smoothing(false);

    let corner = params.corner_params().unwrap()[Corner::TopLeft];
    assert_close(corner.smoothing, 0.25);
    assert_close(corner.p, 50.0);

    let preserved = params.with_preserve_smoothing(true).corner_params().unwrap()[Corner::TopLeft];
    assert_close(preserved.smoothing, 1.0);
    assert_close(preserved.p, 50.0);
}

#[test]
fn rejected_inputs() {
    assert!(generate(100.0, 100.0, CornerRadius::uniform(0.0), 0.5, true, true).is_none());
    assert!(generate(100.0, 100.0, CornerRadius::new(10.0, -1.0, 10.0, 10.0), 0.5, true, true).is_none());
    assert!(generate(0.0, 100.0, CornerRadius::uniform(10.0), 0.5, true, true).is_none());
    assert!(generate(100.0, 0.0, CornerRadius::uniform(10.0), 0.5, true, true).is_none());
    assert!(generate(-10.0, 100.0, CornerRadius::uniform(10.0), 0.5, true, false).is_none());
    assert!(generate(100.0, 100.0, CornerRadius::uniform(f32::NAN), 0.5, true, true).is_none());
    assert!(generate(100.0, 100.0, CornerRadius::uniform(10.0), f32::INFINITY, true, true).is_none());
    assert!(SquircleParams::new(100.0, 0.0).with_corner_radius(CornerRadius::uniform(10.0)).to_path().is_none());
}

#[test]
fn rejection_reasons() {
    let params = SquircleParams::new(100.0, 100.0);
    assert_eq!(params.validate(true), Err(SquircleError::NotRounded));

    let params = params.with_corner_radius(CornerRadius::new(10.0, 10.0, 10.0, -1.0));
    assert_eq!(
        params.validate(true),
        Err(SquircleError::NegativeRadius { corner: Corner::BottomLeft })
    );

    let params = SquircleParams::new(0.0, 100.0).with_corner_radius(CornerRadius::uniform(10.0));
    assert_eq!(params.validate(true), Err(SquircleError::EmptySize));
    assert!(params.is_valid(false));

    assert_eq!(
        SquircleError::NegativeRadius { corner: Corner::TopRight }.to_string(),
        "TopRight corner radius is negative"
    );
}

#[test]
fn zero_size_without_size_check() {
    let path = generate(0.0, 100.0, CornerRadius::uniform(10.0), 0.5, true, false).unwrap();
    assert_eq!(path.bounds().width(), 0.0);
    assert_close(path.bounds().height(), 100.0);
}

#[test]
fn huge_size() {
    let size = 1e20;
    let path = generate(size, size, CornerRadius::uniform(24.0), 0.6, true, true).unwrap();

    let bounds = path.bounds();
    assert_close(bounds.left(), 0.0);
    assert_close(bounds.top(), 0.0);
    assert!((bounds.right() / size - 1.0).abs() < 1e-3);
    assert!((bounds.bottom() / size - 1.0).abs() < 1e-3);
    assert!(path.to_cubics().is_some());
}

#[test]
fn idempotent() {
    let params = SquircleParams::new(320.0, 48.0)
        .with_corner_radius(CornerRadius::new(24.0, 24.0, 4.0, 4.0))
        .with_corner_smoothing(0.6);

    assert_eq!(params.to_path(), params.to_path());
    assert_eq!(
        params.to_path(),
        generate(320.0, 48.0, CornerRadius::new(24.0, 24.0, 4.0, 4.0), 0.6, true, true)
    );
}

#[test]
fn svg_data() {
    let path = generate(100.0, 100.0, CornerRadius::uniform(10.0), 0.0, true, true).unwrap();
    let data = path.to_string();

    assert!(data.starts_with("M 90 0 c "), "{}", data);
    assert!(data.contains(" a 10 10 0 0 1 "), "{}", data);
    assert!(data.contains(" L 100 90 "), "{}", data);
    assert!(data.ends_with(" L 90 0 Z"), "{}", data);
    assert!(!data.contains("-0 "), "{}", data);
}

#[test]
fn cubics_only() {
    let path = generate(150.0, 150.0, CornerRadius::uniform(24.0), 0.8, true, true).unwrap();
    let cubics = path.to_cubics().unwrap();

    assert_eq!(cubics.fill_rule(), FillRule::EvenOdd);
    assert_eq!(cubics.len(), path.len());
    assert!(cubics
        .commands()
        .iter()
        .all(|c| !matches!(c, PathCommand::ArcTo(..)) && !c.is_relative()));
    assert_point_close(cubics.start_point(), path.start_point());
    assert_close(cubics.bounds().width(), 150.0);
    assert_close(cubics.bounds().height(), 150.0);
}

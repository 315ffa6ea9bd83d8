use squircle::*;

// Prints an SVG document with a few squircles.
//
// Run with `--features tracing` and `RUST_LOG=squircle=trace` to see derived corner parameters.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let shapes = [
        (CornerRadius::uniform(24.0), 0.0),
        (CornerRadius::uniform(24.0), 0.6),
        (CornerRadius::uniform(24.0), 1.0),
        (CornerRadius::new(60.0, 8.0, 60.0, 8.0), 0.8),
        (CornerRadius::new(80.0, 80.0, 0.0, 0.0), 0.5),
    ];

    println!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="850" height="170">"#);
    for (i, (radius, smoothing)) in shapes.iter().enumerate() {
        let path = match generate(150.0, 150.0, *radius, *smoothing, true, true) {
            Some(v) => v,
            None => {
                eprintln!("Error: cannot build a squircle from {:?}", radius);
                continue;
            }
        };

        println!(
            r##"  <path transform="translate({} 10)" fill="#3d7fa6" fill-rule="evenodd" d="{}"/>"##,
            10 + i * 170,
            path
        );
    }
    println!("</svg>");
}

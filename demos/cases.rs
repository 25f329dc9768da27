//! Runs the reference offset cases and logs every resulting polygon.
//!
//! Usage:
//! ```text
//! cargo run --example cases
//! RUST_LOG=miter_offset=trace cargo run --example cases
//! ```

use miter_offset::operations::offset::{MiterOffsetStrategy, OffsetService};
use tracing::{error, info};

struct Case {
    title: &'static str,
    coords: &'static [(f64, f64)],
    distance: f64,
}

const CASES: &[Case] = &[
    Case {
        title: "U-shape (expand d=1)",
        coords: &[
            (3.0, 12.0),
            (12.0, 12.0),
            (12.0, 3.0),
            (9.0, 3.0),
            (9.0, 9.0),
            (6.0, 9.0),
            (6.0, 3.0),
            (3.0, 3.0),
        ],
        distance: 1.0,
    },
    Case {
        title: "notch (expand d=1)",
        coords: &[
            (4.0, 10.0),
            (18.0, 10.0),
            (18.0, 4.0),
            (12.0, 4.0),
            (10.0, 6.0),
            (8.0, 4.0),
            (4.0, 4.0),
        ],
        distance: 1.0,
    },
    Case {
        title: "zero offset (d=0)",
        coords: &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        distance: 0.0,
    },
    Case {
        title: "full collapse (shrink d=-5)",
        coords: &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)],
        distance: -5.0,
    },
    Case {
        title: "split (shrink d=-0.6)",
        coords: &[
            (2.0, 9.0),
            (8.0, 9.0),
            (8.0, 2.0),
            (6.0, 2.0),
            (6.0, 8.0),
            (4.0, 8.0),
            (4.0, 2.0),
            (2.0, 2.0),
        ],
        distance: -0.6,
    },
    Case {
        title: "clockwise square (d=1)",
        coords: &[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)],
        distance: 1.0,
    },
];

fn main() {
    // Default: WARN for everything, INFO for this crate and the demo.
    // Override with RUST_LOG (e.g. RUST_LOG=miter_offset=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cases=info".parse().unwrap_or_default())
        .add_directive("miter_offset=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let service = OffsetService::new(MiterOffsetStrategy);

    for case in CASES {
        let result = match service.offset_polygon(case.coords, case.distance) {
            Ok(result) => result,
            Err(e) => {
                error!(case = case.title, "offset failed: {e}");
                continue;
            }
        };

        if result.is_empty() {
            info!(case = case.title, "DISAPPEARED");
            continue;
        }
        for (i, poly) in result.iter().enumerate() {
            let vertices: Vec<String> = poly
                .vertices
                .iter()
                .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
                .collect();
            info!(
                case = case.title,
                index = i + 1,
                area = poly.area(),
                "result: {}",
                vertices.join(" ")
            );
        }
    }
}

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use planegeom::prelude::*;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Evaluate planar transforms, line crossings and axis-plane rays")]
struct Cmd {
    /// Emit debug events on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify an affine map given as m11,m12,m21,m22,ox,oy
    Classify {
        #[arg(long, allow_hyphen_values = true)]
        m: String,
    },
    /// Map a point (or a vector with --vector) through an affine map
    Transform {
        #[arg(long, allow_hyphen_values = true)]
        m: String,
        #[arg(long, allow_hyphen_values = true)]
        xy: String,
        #[arg(long)]
        vector: bool,
    },
    /// Intersect two lines, each given by two points x1,y1,x2,y2
    Cross {
        #[arg(long, allow_hyphen_values = true)]
        first: String,
        #[arg(long, allow_hyphen_values = true)]
        second: String,
        /// Treat the inputs as finite segments
        #[arg(long)]
        segments: bool,
    },
    /// Query an axis-plane ray at a vertical line
    Ray {
        #[arg(long, value_enum, default_value_t = Plane::Xz)]
        plane: Plane,
        #[arg(long, allow_hyphen_values = true)]
        origin: String,
        #[arg(long, allow_hyphen_values = true)]
        direction: String,
        #[arg(long, allow_hyphen_values = true)]
        at: f64,
    },
    /// Print version information
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Plane {
    Xz,
    Yz,
}

#[derive(Debug, Serialize)]
struct ClassifyOut {
    kind: String,
    coefficients: [f64; 6],
    determinant: f64,
    inverse: Option<[f64; 6]>,
}

#[derive(Debug, Serialize)]
struct TransformOut {
    kind: String,
    vector: bool,
    input: [f64; 2],
    output: [f64; 2],
}

#[derive(Debug, Serialize)]
struct LineOut {
    a: f64,
    b: f64,
    c: f64,
    equation: String,
}

#[derive(Debug, Serialize)]
struct CrossOut {
    first: LineOut,
    second: LineOut,
    segments: bool,
    point: Option<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct RayOut {
    plane: Plane,
    origin: [f64; 2],
    direction: [f64; 2],
    at: f64,
    point: [f64; 2],
    parameter: f64,
    mapped_back: f64,
}

#[derive(Debug, Serialize)]
struct ReportOut {
    planegeom: &'static str,
    cli: &'static str,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let doc = match cmd.action {
        Action::Classify { m } => serde_json::to_value(classify(&m)?)?,
        Action::Transform { m, xy, vector } => serde_json::to_value(transform(&m, &xy, vector)?)?,
        Action::Cross {
            first,
            second,
            segments,
        } => serde_json::to_value(cross(&first, &second, segments)?)?,
        Action::Ray {
            plane,
            origin,
            direction,
            at,
        } => serde_json::to_value(ray(plane, &origin, &direction, at)?)?,
        Action::Report => serde_json::to_value(report())?,
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Parse exactly `N` comma separated numbers for argument `--name`.
fn parse_coords<const N: usize>(name: &str, raw: &str) -> Result<[f64; N]> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("--{name}: not a number: {part:?}"))
        })
        .collect::<Result<Vec<f64>>>()?;
    if values.len() != N {
        bail!("--{name}: expected {N} comma separated values, got {}", values.len());
    }
    let mut out = [0.0; N];
    out.copy_from_slice(&values);
    Ok(out)
}

fn parse_affine(raw: &str) -> Result<ClassifiedAffine2> {
    let [m11, m12, m21, m22, ox, oy] = parse_coords::<6>("m", raw)?;
    Ok(ClassifiedAffine2::new(m11, m12, m21, m22, ox, oy))
}

fn classify(raw: &str) -> Result<ClassifyOut> {
    let m = parse_affine(raw)?;
    tracing::info!(kind = ?m.kind(), "classify");
    Ok(ClassifyOut {
        kind: format!("{:?}", m.kind()),
        coefficients: m.coefficients(),
        determinant: m.determinant(),
        inverse: m.inverse().map(|inv| inv.coefficients()),
    })
}

fn transform(raw_m: &str, raw_xy: &str, vector: bool) -> Result<TransformOut> {
    let m = parse_affine(raw_m)?;
    let [x, y] = parse_coords::<2>("xy", raw_xy)?;
    let (ox, oy) = if vector {
        m.transform_vector_xy(x, y)
    } else {
        m.transform_xy(x, y)
    };
    tracing::info!(kind = ?m.kind(), vector, "transform");
    Ok(TransformOut {
        kind: format!("{:?}", m.kind()),
        vector,
        input: [x, y],
        output: [ox, oy],
    })
}

fn line_out(line: &LineEquation) -> LineOut {
    LineOut {
        a: line.a(),
        b: line.b(),
        c: line.c(),
        equation: line.to_string(),
    }
}

fn cross(raw_first: &str, raw_second: &str, segments: bool) -> Result<CrossOut> {
    let [x1, y1, x2, y2] = parse_coords::<4>("first", raw_first)?;
    let [x3, y3, x4, y4] = parse_coords::<4>("second", raw_second)?;
    let (p1, p2) = (Point2::new(x1, y1), Point2::new(x2, y2));
    let (p3, p4) = (Point2::new(x3, y3), Point2::new(x4, y4));
    let first = LineEquation::from_points(p1, p2);
    let second = LineEquation::from_points(p3, p4);
    if first.is_invalid() || second.is_invalid() {
        tracing::debug!("degenerate input line (coincident points)");
    }
    let point = if segments {
        LineEquation::cross_line_segment(p1, p2, p3, p4)
    } else {
        LineEquation::cross(&first, &second)
    };
    tracing::info!(segments, hit = point.is_some(), "cross");
    Ok(CrossOut {
        first: line_out(&first),
        second: line_out(&second),
        segments,
        point: point.map(|p| [p.x, p.y]),
    })
}

fn ray(plane: Plane, raw_origin: &str, raw_direction: &str, at: f64) -> Result<RayOut> {
    let [o1, o2] = parse_coords::<2>("origin", raw_origin)?;
    let [d1, d2] = parse_coords::<2>("direction", raw_direction)?;
    if d1 == 0.0 && d2 == 0.0 {
        tracing::debug!("zero direction; results will be NaN");
    }
    let out = match plane {
        Plane::Xz => {
            let r = RayXZ::new(PointXZ::new(o1, o2), VectorXZ::new(d1, d2));
            let p = r.get_point(at);
            let t = r.from_vertical_line(at);
            RayOut {
                plane,
                origin: [o1, o2],
                direction: [r.direction().x, r.direction().z],
                at,
                point: [p.x, p.z],
                parameter: t,
                mapped_back: r.map_to_vertical_line(t),
            }
        }
        Plane::Yz => {
            let r = RayYZ::new(PointYZ::new(o1, o2), VectorYZ::new(d1, d2));
            let p = r.get_point(at);
            let t = r.from_vertical_line(at);
            RayOut {
                plane,
                origin: [o1, o2],
                direction: [r.direction().y, r.direction().z],
                at,
                point: [p.y, p.z],
                parameter: t,
                mapped_back: r.map_to_vertical_line(t),
            }
        }
    };
    tracing::info!(plane = ?plane, at, parameter = out.parameter, "ray");
    Ok(out)
}

fn report() -> ReportOut {
    ReportOut {
        planegeom: planegeom::VERSION,
        cli: env!("CARGO_PKG_VERSION"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coords_counts_and_numbers() {
        assert_eq!(parse_coords::<2>("xy", "5, -7").unwrap(), [5.0, -7.0]);
        let err = parse_coords::<2>("xy", "1,2,3").unwrap_err();
        assert!(err.to_string().contains("--xy"));
        assert!(parse_coords::<2>("xy", "1,abc").is_err());
    }

    #[test]
    fn classify_reports_kind_and_inverse() {
        let out = classify("1,0,0,1,4,-2").unwrap();
        assert_eq!(out.kind, "Translation");
        assert_eq!(out.coefficients, [1.0, 0.0, 0.0, 1.0, 4.0, -2.0]);
        assert_eq!(out.inverse, Some([1.0, 0.0, 0.0, 1.0, -4.0, 2.0]));
        assert!(classify("0,0,0,1,0,0").unwrap().inverse.is_none());
    }

    #[test]
    fn transform_point_and_vector() {
        let p = transform("0,1,1,0,1,1", "5,7", false).unwrap();
        assert_eq!(p.output, [8.0, 6.0]);
        let v = transform("0,1,1,0,1,1", "5,7", true).unwrap();
        assert_eq!(v.output, [7.0, 5.0]);
    }

    #[test]
    fn cross_lines_and_segments() {
        let hit = cross("0,0,10,0", "5,-5,5,5", false).unwrap();
        assert_eq!(hit.point, Some([5.0, 0.0]));
        let miss = cross("0,0,4,0", "5,-5,5,5", true).unwrap();
        assert_eq!(miss.point, None);
        let json = serde_json::to_value(&miss).unwrap();
        assert!(json["point"].is_null());
    }

    #[test]
    fn ray_round_trips_through_parameter() {
        let out = ray(Plane::Yz, "2,1", "2,-1", 6.0).unwrap();
        assert_eq!(out.point[0], 6.0);
        assert!((out.point[1] + 1.0).abs() < 1e-12);
        assert!((out.mapped_back - 6.0).abs() < 1e-12);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["plane"], "yz");
    }

    #[test]
    fn report_lists_versions() {
        assert_eq!(report().planegeom, planegeom::VERSION);
    }
}

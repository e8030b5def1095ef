use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use phase_solids::prelude::*;
use phase_solids::verify::cfg::{EDGE_TOL, GOLDEN_TOL};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "phase-solids")]
#[command(about = "Platonic solid tables, phase rotors, and their numerical checks")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Narrow,
    Wide,
}

impl From<ModeArg> for EdgeMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Narrow => EdgeMode::Narrow,
            ModeArg::Wide => EdgeMode::Wide,
        }
    }
}

/// Flags shared by every verifying subcommand.
#[derive(clap::Args, Clone, Copy, Debug)]
struct VerifyArgs {
    #[arg(long, default_value_t = EDGE_TOL)]
    tolerance: f64,
    #[arg(long, value_enum, default_value_t = ModeArg::Narrow)]
    mode: ModeArg,
    /// Also require a coordinate ratio close to the golden ratio
    #[arg(long)]
    phi: bool,
}

impl VerifyArgs {
    fn cfg(self) -> VerifyCfg {
        VerifyCfg {
            tolerance: self.tolerance,
            edge_mode: self.mode.into(),
            check_phi: self.phi,
            golden_tolerance: GOLDEN_TOL,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print the vertex table of a solid as JSON
    Solid { name: String },
    /// Verify a catalog solid; exits non-zero on failure
    Verify {
        name: String,
        #[command(flatten)]
        args: VerifyArgs,
    },
    /// Verify a point set read from a CSV with columns x, y, z
    VerifyCsv {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        args: VerifyArgs,
    },
    /// Print phase rotors and their stereographic projections
    Rotor {
        #[arg(long, allow_hyphen_values = true, default_value_t = -4)]
        from: i32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 4)]
        to: i32,
        /// Run the verifier on the projected points
        #[arg(long)]
        verify: bool,
    },
    /// Write the labelled vertex table (.csv or .parquet) plus a provenance sidecar
    Export {
        name: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solid { name } => solid(&name),
        Action::Verify { name, args } => verify_named(&name, args.cfg()),
        Action::VerifyCsv { input, args } => verify_csv(&input, args.cfg()),
        Action::Rotor { from, to, verify } => rotor(from, to, verify),
        Action::Export { name, out } => export(&name, &out).map(|_| ()),
        Action::Report => report(),
    }
}

/// JSON view of a `FullReport`.
#[derive(Debug, Serialize)]
struct VerifySummary {
    points: usize,
    passed: bool,
    edge_mode: String,
    edges: usize,
    /// Edge count of the catalog solid, when the input is one.
    expected_edges: Option<usize>,
    edge_length: Option<f64>,
    edge_max_deviation: f64,
    mismatched: Vec<f64>,
    radius: f64,
    sphere_max_deviation: f64,
    golden: Option<String>,
}

impl VerifySummary {
    fn new(points: usize, r: &FullReport, expected_edges: Option<usize>) -> Self {
        Self {
            points,
            passed: r.passed(),
            edge_mode: r.edges.mode.to_string(),
            edges: r.edges.edge_count(),
            expected_edges,
            edge_length: r.edges.reference,
            edge_max_deviation: r.edges.max_deviation,
            mismatched: r.edges.mismatched.clone(),
            radius: r.sphere.radius,
            sphere_max_deviation: r.sphere.max_deviation,
            golden: r
                .golden
                .map(|h| format!("vertex {} {} = {}", h.index, h.axes, h.ratio)),
        }
    }
}

fn as_rows(points: &[Point3]) -> Vec<[f64; 3]> {
    points.iter().map(|p| [p.x, p.y, p.z]).collect()
}

fn solid(name: &str) -> Result<()> {
    let pts = generate_platonic_solid(name)?;
    println!("{}", serde_json::to_string_pretty(&as_rows(pts))?);
    Ok(())
}

/// Verify and print; the returned report is what decides the exit status.
fn run_verify(
    points: &[Point3],
    cfg: VerifyCfg,
    expected_edges: Option<usize>,
) -> Result<FullReport> {
    let report = verify_all(points, &cfg, &mut TracingSink);
    let summary = VerifySummary::new(points.len(), &report, expected_edges);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if !report.passed() {
        bail!("verification failed");
    }
    Ok(report)
}

fn verify_named(name: &str, cfg: VerifyCfg) -> Result<()> {
    let solid: Solid = name.parse()?;
    tracing::info!(%solid, tolerance = cfg.tolerance, mode = %cfg.edge_mode, "verify");
    let report = run_verify(solid.vertices(), cfg, Some(solid.edge_count()))?;
    if report.edges.edge_count() != solid.edge_count() {
        tracing::warn!(
            %solid,
            inferred = report.edges.edge_count(),
            expected = solid.edge_count(),
            "inferred edge count differs from the solid's"
        );
    }
    Ok(())
}

fn verify_csv(input: &Path, cfg: VerifyCfg) -> Result<()> {
    let pts = read_points_csv(input)?;
    tracing::info!(input = %input.display(), points = pts.len(), "verify_csv");
    run_verify(&pts, cfg, None).map(|_| ())
}

/// Read `x, y, z` columns (any numeric type) from a CSV file.
fn read_points_csv(path: &Path) -> Result<Vec<Point3>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("selecting x, y, z from {}", path.display()))?;
    let column = |name: &str| -> Result<Vec<f64>> {
        df.column(name)?
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("missing {name} in row {row}")))
            .collect()
    };
    let (xs, ys, zs) = (column("x")?, column("y")?, column("z")?);
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| Point3::new(x, y, z))
        .collect())
}

#[derive(Debug, Serialize)]
struct RotorRow {
    n: i32,
    rotor: [f64; 4],
    projected: [f64; 3],
}

fn rotor(from: i32, to: i32, verify: bool) -> Result<()> {
    if from > to {
        bail!("empty exponent range {from}..={to}");
    }
    tracing::info!(from, to, "rotor");
    let mut rows = Vec::new();
    for n in from..=to {
        let q = generate_phase_rotor(n);
        let p = stereographic_projection(q)?;
        rows.push(RotorRow {
            n,
            rotor: [q.x, q.y, q.z, q.w],
            projected: [p.x, p.y, p.z],
        });
    }
    println!("{}", serde_json::to_string_pretty(&rows)?);
    if verify {
        let orbit = rotor_orbit(from..=to)?;
        run_verify(&orbit, VerifyCfg::default(), None)?;
    }
    Ok(())
}

/// Vertex table with labels (index) and norms, ready for external plotting.
fn vertex_frame(points: &[Point3]) -> Result<DataFrame> {
    let index: Vec<u32> = (0..points.len() as u32).collect();
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
    let norms: Vec<f64> = points.iter().map(|p| p.norm()).collect();
    Ok(df!(
        "index" => index,
        "x" => xs,
        "y" => ys,
        "z" => zs,
        "norm" => norms
    )?)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            other => bail!("unsupported export format {other:?} (expected .csv or .parquet)"),
        }
    }
}

/// Nothing touches the filesystem until name and format are both valid.
fn export(name: &str, out: &Path) -> Result<PathBuf> {
    let solid: Solid = name.parse()?;
    let format = ExportFormat::from_path(out)?;
    tracing::info!(solid = %solid, out = %out.display(), ?format, "export");
    let mut df = vertex_frame(solid.vertices())?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        ExportFormat::Csv => {
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        ExportFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    let prov = Provenance::new(
        "export",
        json!({ "solid": solid.name(), "vertices": df.height() }),
    );
    write_sidecar(out, prov)
}

fn report() -> Result<()> {
    let solids: Vec<&str> = Solid::ALL.iter().map(|s| s.name()).collect();
    let prov = Provenance::new("report", json!({ "solids": solids }));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn verify_named_accepts_catalog_solids() {
        for s in Solid::ALL {
            assert!(verify_named(s.name(), VerifyCfg::default()).is_ok(), "{s}");
        }
        assert!(verify_named("sphere", VerifyCfg::default()).is_err());
    }

    #[test]
    fn verify_named_fails_when_phi_is_missing() {
        let cfg = VerifyCfg {
            check_phi: true,
            ..VerifyCfg::default()
        };
        assert!(verify_named("ICOSAHEDRON", cfg).is_ok());
        assert!(verify_named("octahedron", cfg).is_err());
    }

    #[test]
    fn exported_csv_verifies_like_the_catalog() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("dodecahedron.csv");
        let sidecar = export("Dodecahedron", &out).unwrap();
        assert!(sidecar.ends_with("dodecahedron.provenance.json"));
        let pts = read_points_csv(&out).unwrap();
        assert_eq!(pts.len(), 20);
        assert!(verify_csv(&out, VerifyCfg::default()).is_ok());
    }

    #[test]
    fn export_writes_parquet_and_rejects_unknown_formats() {
        let dir = tempdir().unwrap();
        assert!(export("cube", &dir.path().join("cube.parquet")).is_ok());
        assert!(export("cube", &dir.path().join("cube.txt")).is_err());
        assert!(!dir.path().join("cube.txt").exists());
        assert!(export("cube", &dir.path().join("sub").join("cube")).is_err());
        assert!(!dir.path().join("sub").exists());
        assert!(export("sphere", &dir.path().join("sphere.csv")).is_err());
        assert!(!dir.path().join("sphere.csv").exists());
    }

    #[test]
    fn export_format_follows_extension() {
        let fmt = |p: &str| ExportFormat::from_path(Path::new(p)).ok();
        assert_eq!(fmt("out/cube.csv"), Some(ExportFormat::Csv));
        assert_eq!(fmt("cube.parquet"), Some(ExportFormat::Parquet));
        assert_eq!(fmt("cube.CSV"), None);
        assert_eq!(fmt("cube"), None);
    }

    #[test]
    fn summary_reports_expected_next_to_inferred_edges() {
        for s in Solid::ALL {
            let report = verify_all(s.vertices(), &VerifyCfg::default(), &mut NullSink);
            let summary = VerifySummary::new(s.vertices().len(), &report, Some(s.edge_count()));
            assert_eq!(summary.expected_edges, Some(summary.edges), "{s}");
            assert!(summary.passed, "{s}");
        }
    }

    #[test]
    fn vertex_frame_has_labels_and_norms() {
        let df = vertex_frame(Solid::Octahedron.vertices()).unwrap();
        assert_eq!(df.shape(), (6, 5));
        let norms: Vec<Option<f64>> = df
            .column("norm")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert!(norms.iter().all(|n| *n == Some(1.0)));
    }

    #[test]
    fn rotor_rejects_reversed_range() {
        assert!(rotor(3, -3, false).is_err());
        assert!(rotor(-2, 2, false).is_ok());
    }
}

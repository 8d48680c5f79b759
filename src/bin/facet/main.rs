//! Facet CLI - mesh ingestion command-line tool.
//!
//! Usage: facet <COMMAND> [OPTIONS]
//!
//! Run `facet --help` for available commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use facet::algo::project::{project_uvs, Projection, UvSource};
use facet::generate::uv_sphere;
use facet::io::obj;

#[derive(Parser)]
#[command(name = "facet")]
#[command(author, version, about = "Mesh ingestion CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Generate texture coordinates and save the result
    Uv {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        /// Projection method
        #[arg(short, long, value_enum, default_value = "planar")]
        method: MapMethod,

        /// Vector fed into the projection
        #[arg(short, long, value_enum, default_value = "position")]
        source: MapSource,
    },

    /// Generate a UV-sphere mesh and save it
    Sphere {
        /// Output mesh file
        output: PathBuf,

        /// Sphere radius
        #[arg(short, long, default_value = "1.0")]
        radius: f32,

        /// Segments around the equator
        #[arg(long, default_value = "16")]
        horizontal: u32,

        /// Segments pole to pole
        #[arg(long, default_value = "16")]
        vertical: u32,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MapMethod {
    /// Cube-face projection along the dominant axis
    Planar,
    /// Cylindrical coordinates around the z axis
    Cylindrical,
    /// Spherical coordinates on the circumscribed sphere
    Spherical,
}

impl From<MapMethod> for Projection {
    fn from(method: MapMethod) -> Self {
        match method {
            MapMethod::Planar => Projection::Planar,
            MapMethod::Cylindrical => Projection::Cylindrical,
            MapMethod::Spherical => Projection::Spherical,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MapSource {
    /// Project vertex positions
    Position,
    /// Project vertex normals
    Normal,
}

impl From<MapSource> for UvSource {
    fn from(source: MapSource) -> Self {
        match source {
            MapSource::Position => UvSource::Position,
            MapSource::Normal => UvSource::Normal,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => cmd_info(&input)?,

        Commands::Uv {
            input,
            output,
            method,
            source,
        } => cmd_uv(&input, &output, method, source)?,

        Commands::Sphere {
            output,
            radius,
            horizontal,
            vertical,
        } => cmd_sphere(&output, radius, horizontal, vertical)?,
    }

    Ok(())
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = obj::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Triangles: {}", mesh.num_triangles());
    println!("Face normal lines: {}", mesh.face_normal_lines.len());
    println!("Vertex normal lines: {}", mesh.vertex_normal_lines.len());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
        let diag = max - min;
        println!(
            "Dimensions: {:.3} x {:.3} x {:.3}",
            diag.x, diag.y, diag.z
        );
    }

    Ok(())
}

fn cmd_uv(
    input: &PathBuf,
    output: &PathBuf,
    method: MapMethod,
    source: MapSource,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = obj::load(input)?;
    println!(
        "Loaded: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    project_uvs(&mut mesh, method.into(), source.into());
    obj::save_with_uvs(&mesh, output)?;
    println!("Saved: {}", output.display());

    Ok(())
}

fn cmd_sphere(
    output: &PathBuf,
    radius: f32,
    horizontal: u32,
    vertical: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = uv_sphere(radius, horizontal, vertical)?;
    println!(
        "Generated: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    obj::save(&mesh, output)?;
    println!("Saved: {}", output.display());

    Ok(())
}

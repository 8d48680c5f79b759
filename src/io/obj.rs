//! OBJ-like mesh loading and saving.
//!
//! The format consumed here is the vertex/face subset of Wavefront OBJ:
//! ASCII lines, `v x y z` for vertex positions, `f i1 i2 ... in` for faces
//! (1-based indices, 2 or more of them, fan-triangulated), `#` for
//! comments. Normals, texture coordinates and materials in the file are
//! ignored; the pipeline derives its own.
//!
//! Parsing is a single streaming pass: the bounding accumulator needed by
//! normalization is folded in as vertices are appended, so [`load`] never
//! re-scans the vertex buffer.
//!
//! # Error recovery
//!
//! Malformed lines are never fatal. A vertex line with missing,
//! non-numeric or non-finite components, or a face line with a bad index,
//! is skipped whole with a `warn!` diagnostic and the load continues. Only
//! I/O failures (and an input with no vertices at all) fail the load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use tracing::warn;

use crate::algo::{normalize, normals};
use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, Vertex};

/// Load a mesh and run the full derivation pipeline.
///
/// Parses the file, normalizes the result into the unit cube, and derives
/// face/vertex normals with their visualization buffers. Texture
/// coordinates are left zeroed; assign them with
/// [`crate::algo::project::project_uvs`].
///
/// # Errors
///
/// [`MeshError::Io`] if the file cannot be opened or read,
/// [`MeshError::EmptyMesh`] if it contains no vertex lines.
///
/// # Example
///
/// ```no_run
/// use facet::io::obj;
///
/// let mesh = obj::load("model.obj").unwrap();
/// println!("{} vertices, {} triangles", mesh.num_vertices(), mesh.num_triangles());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let (mut mesh, bounds) = parse(path)?;
    normalize::normalize(&mut mesh, &bounds)?;
    normals::generate(&mut mesh);
    Ok(mesh)
}

/// Parse a mesh file into raw buffers plus the streaming bound accumulator.
///
/// No normalization or normal generation happens here; an input without a
/// single valid vertex line yields an empty mesh, not an error.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<(Mesh, normalize::Bounds)> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut mesh = Mesh::new();
    let mut bounds = normalize::Bounds::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let mut tokens = line.split_whitespace();

        // The first token selects the line's meaning; `v` must match
        // exactly so `vn`/`vt` fall through to the ignored branch.
        match tokens.next() {
            Some("v") => match parse_vertex(tokens, number) {
                Ok(position) => {
                    bounds.update(position);
                    mesh.vertices.push(Vertex::new(position));
                }
                Err(e) => warn!("skipping vertex line: {e}"),
            },
            Some("f") => match parse_face(tokens, number, mesh.num_vertices()) {
                Ok(indices) => fan_triangulate(&mut mesh, &indices),
                Err(e) => warn!("skipping face line: {e}"),
            },
            // Comments, directives we do not support, blank lines.
            _ => {}
        }
    }

    Ok((mesh, bounds))
}

fn parse_vertex<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Point3<f32>> {
    let mut component = |axis: &str| -> Result<f32> {
        let token = tokens.next().ok_or_else(|| MeshError::Parse {
            line,
            message: format!("vertex is missing its {axis} component"),
        })?;
        let value: f32 = token.parse().map_err(|_| MeshError::Parse {
            line,
            message: format!("expected a number for {axis}, found {token:?}"),
        })?;
        if !value.is_finite() {
            return Err(MeshError::Parse {
                line,
                message: format!("non-finite {axis} component {token:?}"),
            });
        }
        Ok(value)
    };

    let x = component("x")?;
    let y = component("y")?;
    let z = component("z")?;
    Ok(Point3::new(x, y, z))
}

fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
    vertex_count: usize,
) -> Result<Vec<u32>> {
    let mut indices = Vec::new();

    for token in tokens {
        // `f 1/2/3` carries texture/normal references after the slash;
        // only the leading vertex index is consumed.
        let index_token = token.split('/').next().unwrap_or(token);
        let index: i64 = index_token.parse().map_err(|_| MeshError::Parse {
            line,
            message: format!("expected a face index, found {token:?}"),
        })?;

        // 1-based, positive only; relative (negative) indices are not
        // supported by this format.
        if index < 1 || index as usize > vertex_count {
            return Err(MeshError::Parse {
                line,
                message: format!("face index {index} out of range 1..={vertex_count}"),
            });
        }
        indices.push((index - 1) as u32);
    }

    Ok(indices)
}

/// Triangle-fan decomposition anchored at the face's first vertex:
/// `(i0, i1, i2), (i0, i2, i3), ...`, preserving winding. Faces with
/// fewer than 3 indices contribute nothing.
fn fan_triangulate(mesh: &mut Mesh, indices: &[u32]) {
    for window in indices.windows(2).skip(1) {
        mesh.push_triangle([indices[0], window[0], window[1]]);
    }
}

/// Save a mesh's positions and faces as OBJ.
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
    }
    for [i0, i1, i2] in mesh.triangles() {
        // OBJ indices are 1-based.
        writeln!(writer, "f {} {} {}", i0 + 1, i1 + 1, i2 + 1)?;
    }

    Ok(())
}

/// Save a mesh as OBJ including its texture coordinates.
///
/// Writes one `vt` record per vertex and `f i/i` face references, so the
/// result of a UV projection can be inspected in any OBJ viewer.
pub fn save_with_uvs<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
    }
    for v in &mesh.vertices {
        writeln!(writer, "vt {} {}", v.tex_coord.x, v.tex_coord.y)?;
    }
    for [i0, i1, i2] in mesh.triangles() {
        writeln!(
            writer,
            "f {0}/{0} {1}/{1} {2}/{2}",
            i0 + 1,
            i1 + 1,
            i2 + 1
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use std::io::Write as _;

    const EPS: f32 = 1e-6;

    fn obj_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_single_triangle() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let (mesh, bounds) = parse(file.path()).unwrap();

        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(bounds.count(), 3);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_load_single_triangle() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let mesh = load(file.path()).unwrap();

        // Face normal follows the declared counter-clockwise winding.
        let n = mesh.face_normal_lines[0].end - mesh.face_normal_lines[0].start;
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < EPS);

        // Centered: the vertex average sits at the origin.
        let mut sum = Vector3::zeros();
        for v in &mesh.vertices {
            sum += v.position.coords;
        }
        assert!((sum / 3.0).norm() < EPS);
    }

    #[test]
    fn test_quad_fan_triangulates_into_two_triangles() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
        let (mesh, _) = parse(file.path()).unwrap();

        assert_eq!(mesh.num_triangles(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_polygon_fan_preserves_anchor() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 2 0\nf 1 2 3 4 5\n");
        let (mesh, _) = parse(file.path()).unwrap();

        let triangles: Vec<_> = mesh.triangles().collect();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn test_indices_are_valid_and_triple_aligned() {
        let file = obj_file(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 1\nf 1 2 3\nf 2 3 4\nf 1 3 4 2\n",
        );
        let (mesh, _) = parse(file.path()).unwrap();

        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.num_vertices()));
    }

    #[test]
    fn test_slash_indices() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1 2/2/2 3//3\n");
        let (mesh, _) = parse(file.path()).unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_comments_and_unsupported_directives_ignored() {
        let file = obj_file(
            "# a comment\no object\nvn 0 0 1\nvt 0.5 0.5\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        );
        let (mesh, _) = parse(file.path()).unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_triangles(), 1);
    }

    #[test]
    fn test_malformed_vertex_line_is_skipped() {
        let file = obj_file("v 0 0\nv x y z\nv nan 0 0\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let (mesh, bounds) = parse(file.path()).unwrap();

        // The three malformed lines are dropped whole; indices resolve
        // against the surviving buffer.
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(bounds.count(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices[0].position, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_face_with_too_few_indices_contributes_nothing() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\nf 1\nf\nf 1 2 3\n");
        let (mesh, _) = parse(file.path()).unwrap();
        assert_eq!(mesh.num_triangles(), 1);
    }

    #[test]
    fn test_out_of_range_face_index_skips_line() {
        let file = obj_file("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\nf 1 2 0\nf -1 2 3\nf 1 2 3\n");
        let (mesh, _) = parse(file.path()).unwrap();

        assert_eq!(mesh.num_triangles(), 1);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load("definitely/not/a/real/path.obj");
        assert!(matches!(result, Err(MeshError::Io(_))));
    }

    #[test]
    fn test_empty_file_yields_empty_mesh_error() {
        let file = obj_file("# nothing but comments\n");
        let (mesh, bounds) = parse(file.path()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(bounds.count(), 0);

        assert!(matches!(load(file.path()), Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_save_round_trip() {
        let file = obj_file("v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n");
        let (mesh, _) = parse(file.path()).unwrap();

        let out = tempfile::NamedTempFile::new().unwrap();
        save(&mesh, out.path()).unwrap();

        let (reloaded, _) = parse(out.path()).unwrap();
        assert_eq!(reloaded.num_vertices(), 3);
        assert_eq!(reloaded.indices, mesh.indices);
        assert_eq!(reloaded.vertices[1].position, mesh.vertices[1].position);
    }

    #[test]
    fn test_save_with_uvs_is_reparsable() {
        let file = obj_file("v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n");
        let (mut mesh, _) = parse(file.path()).unwrap();
        mesh.vertices[0].tex_coord = nalgebra::Point2::new(0.25, 0.75);

        let out = tempfile::NamedTempFile::new().unwrap();
        save_with_uvs(&mesh, out.path()).unwrap();

        // The `vt` records and `f i/i` references parse back cleanly.
        let (reloaded, _) = parse(out.path()).unwrap();
        assert_eq!(reloaded.num_vertices(), 3);
        assert_eq!(reloaded.indices, vec![0, 1, 2]);
    }
}

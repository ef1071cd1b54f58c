use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use ringtube_mesh::{Triangle, TriangleMesh, Vector3};
use std::io::{Read, Seek, Write};
use std::path::Path;

const HEADER: &[u8] = b"ringtube binary stl";
const HEADER_LEN: usize = 80;

fn read_vector<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: f.read_f32::<LittleEndian>()?,
        y: f.read_f32::<LittleEndian>()?,
        z: f.read_f32::<LittleEndian>()?,
    })
}

fn write_vector<T: Write>(f: &mut T, v: Vector3) -> std::io::Result<()> {
    f.write_f32::<LittleEndian>(v.x)?;
    f.write_f32::<LittleEndian>(v.y)?;
    f.write_f32::<LittleEndian>(v.z)
}

fn read_binary<M: TriangleMesh, T: Read + Seek>(f: &mut T) -> std::io::Result<M> {
    // Binary files start with an 80 byte header. There is no defined structure for this
    // header so we skip it and load the geometry.
    f.seek(std::io::SeekFrom::Start(HEADER_LEN as u64))?;

    // Immediately following the header is an unsigned 32-bit integer that indicates the
    // number of triangles that follow.
    let n_triangles = f.read_u32::<LittleEndian>()? as usize;

    let mut data = Vec::<Triangle>::with_capacity(n_triangles);
    for _ in 0..n_triangles {
        // Each triangle is a normal vector followed by its 3 vertices. Readers are expected
        // to derive orientation from the vertex order, so the normal is ignored.
        let _normal = read_vector(f)?;
        data.push(Triangle {
            p0: read_vector(f)?,
            p1: read_vector(f)?,
            p2: read_vector(f)?,
        });
        // After the triangle geometry there is a 2-byte unsigned integer called the
        // "attribute byte count". There is no standard structure of this field.
        let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    }
    Ok(M::from_triangles(data))
}

fn write_binary<M: TriangleMesh, T: Write>(mesh: &M, f: &mut T) -> std::io::Result<()> {
    // Triangles that collapse to a single point cover no area; leave them out of the file.
    let triangles: Vec<Triangle> = mesh
        .triangles()
        .filter(|t| !(t.p0 == t.p1 && t.p1 == t.p2))
        .collect();
    let skipped = mesh.triangle_count() - triangles.len();
    if skipped > 0 {
        log::debug!("skipping {} degenerate triangles", skipped);
    }

    let n_triangles = u32::try_from(triangles.len())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let mut header = [0u8; HEADER_LEN];
    header[..HEADER.len()].copy_from_slice(HEADER);
    f.write_all(&header)?;
    f.write_u32::<LittleEndian>(n_triangles)?;

    for t in &triangles {
        // Vertices are written in winding order, which is all a reader needs to orient the
        // facet, so the normal is left as (0, 0, 0).
        write_vector(f, Vector3::new(0.0, 0.0, 0.0))?;
        write_vector(f, t.p0)?;
        write_vector(f, t.p1)?;
        write_vector(f, t.p2)?;
        f.write_u16::<LittleEndian>(0)?;
    }
    log::debug!("wrote {} triangles", n_triangles);
    Ok(())
}

pub fn read_stl<M: TriangleMesh, P: AsRef<Path>>(p: P) -> std::io::Result<M> {
    let mut f = std::io::BufReader::new(std::fs::File::open(p)?);
    read_binary(&mut f)
}

pub fn parse_stl<M: TriangleMesh>(data: &[u8]) -> std::io::Result<M> {
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

/// Writes `mesh` as a binary STL file at `p`, replacing any existing file.
pub fn write_stl<M: TriangleMesh, P: AsRef<Path>>(mesh: &M, p: P) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(p)?);
    write_binary(mesh, &mut f)?;
    f.flush()
}

/// Encodes `mesh` as an in-memory binary STL.
pub fn encode_stl<M: TriangleMesh>(mesh: &M) -> std::io::Result<Vec<u8>> {
    let mut data = Vec::new();
    write_binary(mesh, &mut data)?;
    Ok(data)
}

pub trait StlReader: Read {
    fn read_stl<M: TriangleMesh>(&mut self) -> std::io::Result<M>;
}

impl<T: Read + Seek> StlReader for T {
    fn read_stl<M: TriangleMesh>(&mut self) -> std::io::Result<M> {
        read_binary(self)
    }
}

pub trait StlWriter: Write {
    fn write_stl<M: TriangleMesh>(&mut self, mesh: &M) -> std::io::Result<()>;
}

impl<T: Write> StlWriter for T {
    fn write_stl<M: TriangleMesh>(&mut self, mesh: &M) -> std::io::Result<()> {
        write_binary(mesh, self)
    }
}

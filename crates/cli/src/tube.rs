use anyhow::Context;
use ringtube_mesh::{TriangleMesh, TubeConfig, TubeMesh};

use crate::args::{StatsArgs, StlArgs, TubeArgs};

fn build_tube(args: &TubeArgs) -> anyhow::Result<TubeMesh> {
    let config = TubeConfig::new(args.rings, args.cube_size)
        .context("invalid tube configuration")?;
    Ok(config.build()?)
}

pub fn stl_command(args: StlArgs) -> anyhow::Result<()> {
    let mesh = build_tube(&args.tube)?;
    ringtube_stl::write_stl(&mesh, &args.output)
        .with_context(|| format!("failed to write {}", args.output))?;
    log::info!("wrote {} rings to {}", args.tube.rings, args.output);
    Ok(())
}

pub fn stats_command(args: StatsArgs) -> anyhow::Result<()> {
    let mesh = build_tube(&args.tube)?;
    print!("{}", stats(&mesh));
    Ok(())
}

fn stats(mesh: &TubeMesh) -> String {
    let degenerate = mesh.facets.iter().filter(|f| f.is_degenerate()).count();
    format!(
        "vertices: {}\ntriangles: {} ({} unused)\nindices: {}\n",
        mesh.vertices.len(),
        mesh.triangle_count(),
        degenerate,
        mesh.indices().len()
    )
}

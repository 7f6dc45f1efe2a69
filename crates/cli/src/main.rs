use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shapes::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod scene;

use provenance::{ensure_parent, write_sidecar, Payload};
use scene::Scene;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Compose shapes and write PostScript")]
struct Cmd {
    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy)]
struct RenderArgs {
    /// Fractional digits for numbers in the output
    #[arg(long, global = true, default_value_t = 6)]
    precision: usize,
    /// Shortest round-trip numbers instead of fixed precision
    #[arg(long, global = true)]
    shortest: bool,
    /// Render scaled shapes with a `scale` transform instead of leaving them empty
    #[arg(long, global = true)]
    scale_transform: bool,
    /// Page position of the root's center (default: US letter center)
    #[arg(long, global = true, default_value_t = 306.0)]
    origin_x: f64,
    #[arg(long, global = true, default_value_t = 396.0)]
    origin_y: f64,
}

impl RenderArgs {
    fn origin(self) -> Vec2<f64> {
        Vec2::new(self.origin_x, self.origin_y)
    }

    fn cfg(self) -> RenderCfg {
        RenderCfg {
            numbers: if self.shortest {
                NumberFormat::Shortest
            } else {
                NumberFormat::Fixed(self.precision)
            },
            scaled: if self.scale_transform {
                ScaledRender::Transform
            } else {
                ScaledRender::Placeholder
            },
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Render a JSON scene to a PostScript page
    Render {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also write `<out stem>.provenance.json`
        #[arg(long)]
        provenance: bool,
    },
    /// Print dimensions and tree statistics of a JSON scene
    Report {
        #[arg(long)]
        scene: PathBuf,
    },
    /// Render the built-in sample composition
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        provenance: bool,
    },
}

fn main() -> Result<()> {
    // stdout carries command output (`report` prints JSON).
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.render.cfg();
    let origin = cmd.render.origin();
    match cmd.action {
        Action::Render {
            scene,
            out,
            provenance,
        } => {
            let s = load_scene(&scene)?;
            render(&s, &out, cfg, origin, provenance, &scene.display().to_string())
        }
        Action::Report { scene } => {
            let s = load_scene(&scene)?;
            println!("{}", report_text(&s)?);
            Ok(())
        }
        Action::Demo { out, provenance } => {
            render(&Scene::demo(), &out, cfg, origin, provenance, "demo")
        }
    }
}

fn load_scene(path: &Path) -> Result<Scene> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scene {}", path.display()))
}

fn render(
    scene: &Scene,
    out: &Path,
    cfg: RenderCfg,
    origin: Vec2<f64>,
    provenance: bool,
    source: &str,
) -> Result<()> {
    let shape = scene.build().context("building shape tree")?;
    let (width, height) = (shape.width(), shape.height());
    tracing::info!(source, out = %out.display(), width, height, "render");

    ensure_parent(out)?;
    std::fs::write(out, document(&shape, cfg, origin))
        .with_context(|| format!("writing {}", out.display()))?;

    if provenance {
        let payload = Payload::new(serde_json::json!({
            "source": source,
            "scene": scene,
            "numbers": format!("{:?}", cfg.numbers),
            "scaled": format!("{:?}", cfg.scaled),
            "origin": [origin.x, origin.y],
        }))
        .with_dims(width, height);
        let path = write_sidecar(out, payload)?;
        tracing::info!(path = %path.display(), "provenance");
    }
    Ok(())
}

fn report(scene: &Scene) -> Result<serde_json::Value> {
    let shape = scene.build().context("building shape tree")?;
    tracing::info!(kind = ?shape.kind(), "report");
    Ok(serde_json::json!({
        "kind": format!("{:?}", shape.kind()),
        "width": shape.width(),
        "height": shape.height(),
        "nodes": shape.node_count(),
        "depth": shape.depth(),
    }))
}

/// Exactly what `report` prints on stdout.
fn report_text(scene: &Scene) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report(scene)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn demo_render_writes_page_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("pages/demo.ps");
        let origin = Vec2::new(100.0, 100.0);
        render(&Scene::demo(), &out, RenderCfg::default(), origin, true, "demo").unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("%!PS"));
        assert!(text.ends_with("showpage\n"));
        assert!(dir.path().join("pages/demo.provenance.json").exists());
    }

    #[test]
    fn report_lists_statistics() {
        let v = report(&Scene::Vertical(vec![
            Scene::Circle { radius: 1.0 },
            Scene::Circle { radius: 2.0 },
        ]))
        .unwrap();
        assert_eq!(v["kind"], "Vertical");
        assert_eq!(v["height"], 4.0);
        assert_eq!(v["nodes"], 3);
        assert_eq!(v["depth"], 2);
    }

    #[test]
    fn report_text_is_plain_json() {
        let scene = Scene::Horizontal(vec![
            Scene::Rectangle {
                width: 2.0,
                height: 4.0,
            },
            Scene::Spacer {
                width: 1.0,
                height: 1.0,
            },
        ]);
        let text = report_text(&scene).unwrap();
        assert!(text.starts_with('{'));
        assert!(text.ends_with('}'));
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["kind"], "Horizontal");
        assert_eq!(v["nodes"], 3);
        assert_eq!(v["depth"], 2);
    }

    #[test]
    fn bad_scene_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"circle\": {}}").unwrap();
        assert!(load_scene(&path).is_err());
        assert!(load_scene(&dir.path().join("missing.json")).is_err());
    }
}

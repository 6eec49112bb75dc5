use crate::frame::FrameTransforms;
use terra_camera::Camera;

/// Renderer-agnostic interface.
///
/// A renderer reads the camera and the frame transforms derived from it and
/// produces output. It never mutates the camera.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &FrameTransforms, camera: &Camera) -> Self::Output;
}

/// Text renderer for headless runs: dumps the camera basis and matrices.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameTransforms, camera: &Camera) -> String {
        let mut out = String::new();
        let p = camera.position();
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        out.push_str("=== Camera ===\n");
        out.push_str(&format!("position=({:.3}, {:.3}, {:.3})\n", p.x, p.y, p.z));
        out.push_str(&format!(
            "yaw={:.2} pitch={:.2}\n",
            camera.yaw(),
            camera.pitch()
        ));
        out.push_str(&format!("front=({:.3}, {:.3}, {:.3})\n", f.x, f.y, f.z));
        out.push_str(&format!("right=({:.3}, {:.3}, {:.3})\n", r.x, r.y, r.z));
        out.push_str(&format!("up=({:.3}, {:.3}, {:.3})\n", u.x, u.y, u.z));

        for (name, m) in [
            ("model", frame.model),
            ("view", frame.view),
            ("projection", frame.projection),
        ] {
            out.push_str(&format!("{name}:\n"));
            for row in 0..4 {
                let v = m.row(row);
                out.push_str(&format!(
                    "  [{:>8.3} {:>8.3} {:>8.3} {:>8.3}]\n",
                    v.x, v.y, v.z, v.w
                ));
            }
        }

        out
    }
}

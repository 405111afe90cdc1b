use nalgebra::Vector3;
use pendsim_core::RenderContext;

/// Render hook implementation that narrates frames to stdout. Real renderers
/// live outside this workspace; this one gives the driver loop something to
/// draw into.
pub struct ConsoleRenderer {
    material: Vector3<f32>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        ConsoleRenderer {
            material: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn begin_frame(&mut self, iteration: usize) {
        println!("frame {}", iteration);
    }
}

impl RenderContext for ConsoleRenderer {
    fn update_material(&mut self, color: Vector3<f32>) {
        self.material = color;
    }

    fn draw_sphere(&mut self, center: Vector3<f64>, radius: f64) {
        println!(
            "  sphere r={:.3} at ({:.6}, {:.6}, {:.6}) color ({:.2}, {:.2}, {:.2})",
            radius, center.x, center.y, center.z, self.material.x, self.material.y, self.material.z
        );
    }
}

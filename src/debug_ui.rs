// Interactive parameter window.
//
// The left panel builds one slider per row of `params::PARAMS`; the central panel paints
// the pivot marker and the face through the matrices of `compute_frame`, using the same
// clip-to-pixel mapping as the rasterizer.
//
// When the `debug_ui` feature is disabled (or `cli_only` is enabled), `show()` is a no-op.

#[cfg(all(feature = "debug_ui", not(feature = "cli_only")))]
mod imp {
    use crate::mat3::Mat3;
    use crate::mesh::{self, Mesh, Rgba8};
    use crate::params::PARAMS;
    use crate::raster::{clip_to_pixel, BACKGROUND};
    use crate::scene::{compute_frame, SceneParams};
    use eframe::egui;
    use std::cell::Cell;
    use std::rc::Rc;

    pub const ENABLED: bool = true;

    /// Opens the window and blocks until it is closed. Returns the parameters as last edited.
    pub fn show(params: SceneParams) -> Result<SceneParams, String> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1200.0, 800.0)),
            ..Default::default()
        };

        let last = Rc::new(Cell::new(params));
        let app_last = Rc::clone(&last);

        eframe::run_native(
            "xform2d",
            options,
            Box::new(move |_cc| Ok(Box::new(ParamsApp::new(params, app_last)))),
        )
        .map_err(|e| e.to_string())?;

        Ok(last.get())
    }

    struct ParamsApp {
        params: SceneParams,
        initial: SceneParams,
        last: Rc<Cell<SceneParams>>,
        pivot_mesh: Mesh,
        face_mesh: Mesh,
    }

    impl ParamsApp {
        fn new(params: SceneParams, last: Rc<Cell<SceneParams>>) -> Self {
            Self {
                params,
                initial: params,
                last,
                pivot_mesh: mesh::pivot_marker(),
                face_mesh: mesh::smiley_face(),
            }
        }

        fn params_ui(&mut self, ui: &mut egui::Ui) {
            let mut group = "";
            for desc in PARAMS.iter() {
                if desc.group != group {
                    group = desc.group;
                    ui.add_space(6.0);
                    ui.heading(group);
                }

                let mut v = desc.id.get(&self.params);
                let slider = egui::Slider::new(&mut v, desc.min..=desc.max)
                    .step_by(desc.step as f64)
                    .text(desc.label);
                if ui.add(slider).changed() {
                    desc.id.set(&mut self.params, v);
                }
            }

            ui.separator();
            if ui.button("Reset").clicked() {
                self.params = self.initial;
            }

            ui.separator();
            let frame = compute_frame(&self.params);
            ui.monospace(format!("pivot\n{}", frame.pivot));
            ui.monospace(format!("face\n{}", frame.face));
        }
    }

    fn color32(c: Rgba8) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
    }

    /// Vertex stage for the painter: clip space through `xform`, then into `rect`.
    fn to_egui_mesh(mesh: &Mesh, xform: &Mat3, rect: egui::Rect) -> egui::Mesh {
        let mut out = egui::Mesh::default();
        for (&p, &c) in mesh.positions.iter().zip(mesh.colors.iter()) {
            let px = clip_to_pixel(xform.transform_point2(p), rect.width(), rect.height());
            out.colored_vertex(rect.min + egui::vec2(px.x, px.y), color32(c));
        }

        let n = (mesh.vertex_count() / 3 * 3) as u32;
        for i in (0..n).step_by(3) {
            out.add_triangle(i, i + 1, i + 2);
        }
        out
    }

    impl eframe::App for ParamsApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            egui::SidePanel::left("params")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| self.params_ui(ui));
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let frame = compute_frame(&self.params);

                painter.rect_filled(rect, 0.0, color32(BACKGROUND));
                painter.add(egui::Shape::mesh(to_egui_mesh(&self.pivot_mesh, &frame.pivot, rect)));
                painter.add(egui::Shape::mesh(to_egui_mesh(&self.face_mesh, &frame.face, rect)));
            });

            self.last.set(self.params);
        }
    }
}

/// No-op implementation when debug_ui feature is disabled or cli_only is enabled.
#[cfg(not(all(feature = "debug_ui", not(feature = "cli_only"))))]
mod imp {
    use crate::scene::SceneParams;

    pub const ENABLED: bool = false;

    pub fn show(params: SceneParams) -> Result<SceneParams, String> {
        Ok(params)
    }
}

pub use imp::*;

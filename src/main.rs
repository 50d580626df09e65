mod app;
mod ui;

use eframe::egui;

use curio_gallery::config::GalleryConfig;

use app::GalleryApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = GalleryConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Curio Gallery",
        options,
        Box::new(move |_cc| Ok(Box::new(GalleryApp::new(config)))),
    )
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply dark/light visuals
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Poll image decoder and convert completed images to textures
        self.upload_textures(ctx);

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });
        self.sync_canvas_items();

        // Main content area
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui, &ctx_clone);
        });

        self.draw_detail(ctx);
        self.draw_loader(ctx);
    }
}

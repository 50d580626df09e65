//! Toolbar rendering for `GalleryApp`.
//!
//! Draws the view switch, filter and sort selectors, the search field, the
//! canvas controls (shuffle, reset, layout), and the dark-mode toggle.

use eframe::egui;

use curio_gallery::catalog::{Acquisition, SortOrder};
use curio_gallery::layout::LayoutStrategy;
use curio_gallery::view::ViewMode;

use super::GalleryApp;

impl GalleryApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Curio").size(18.0).strong());
            ui.separator();

            for mode in ViewMode::ALL {
                ui.selectable_value(&mut self.view_mode, mode, mode.label());
            }
            ui.separator();

            self.draw_filters(ui);
            ui.separator();

            if self.view_mode == ViewMode::Scattered {
                self.draw_canvas_controls(ui);
                ui.separator();
            }

            let shown = self.visible_ids().len();
            ui.label(
                egui::RichText::new(format!("{} / {}", shown, self.catalog.len()))
                    .color(egui::Color32::GRAY),
            );

            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }

    fn draw_filters(&mut self, ui: &mut egui::Ui) {
        let acquired_text = self.filter.acquired.map_or("Any", Acquisition::label);
        egui::ComboBox::from_id_salt("filter_acquired")
            .selected_text(acquired_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filter.acquired, None, "Any");
                for a in Acquisition::FILTERABLE {
                    ui.selectable_value(&mut self.filter.acquired, Some(a), a.label());
                }
            });

        let countries = self.catalog.countries();
        egui::ComboBox::from_id_salt("filter_country")
            .selected_text(self.filter.country.as_deref().unwrap_or("Anywhere"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filter.country, None, "Anywhere");
                for c in countries {
                    let label = c.clone();
                    ui.selectable_value(&mut self.filter.country, Some(c), label);
                }
            });

        let colors = self.catalog.colors();
        egui::ComboBox::from_id_salt("filter_color")
            .selected_text(self.filter.color.as_deref().unwrap_or("Any colour"))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.filter.color, None, "Any colour");
                for c in colors {
                    let label = c.clone();
                    ui.selectable_value(&mut self.filter.color, Some(c), label);
                }
            });

        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(self.sort.label())
            .show_ui(ui, |ui| {
                for order in SortOrder::ALL {
                    ui.selectable_value(&mut self.sort, order, order.label());
                }
            });

        ui.add_sized(
            [140.0, 22.0],
            egui::TextEdit::singleline(&mut self.filter.query).hint_text("Search..."),
        );
        if !self.filter.is_empty() && ui.small_button("Clear").clicked() {
            self.filter = Default::default();
        }
    }

    fn draw_canvas_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("Shuffle").clicked() {
            self.session.shuffle();
        }
        if ui.button("Reset").clicked() {
            self.session.reset();
        }

        let mut strategy = self.session.strategy();
        egui::ComboBox::from_id_salt("layout_strategy")
            .selected_text(strategy.label())
            .show_ui(ui, |ui| {
                for s in LayoutStrategy::ALL {
                    ui.selectable_value(&mut strategy, s, s.label());
                }
            });
        if strategy != self.session.strategy() {
            self.session.set_strategy(strategy);
        }
    }
}

//! Item detail modal for `GalleryApp`.
//!
//! Arrow keys step through the list the modal was opened from; Escape or
//! the close button dismisses it.

use eframe::egui;

use curio_gallery::catalog::Acquisition;
use curio_gallery::detail::NavCommand;
use curio_gallery::price::format_price;

use super::GalleryApp;
use crate::ui::{acquisition_chip, link_host, placeholder_color};

const DETAIL_IMAGE_MAX: f32 = 420.0;

impl GalleryApp {
    pub fn draw_detail(&mut self, ctx: &egui::Context) {
        let Some(view) = self.detail.as_mut() else {
            return;
        };

        let key = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) {
                Some(NavCommand::Next)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(NavCommand::Prev)
            } else if i.key_pressed(egui::Key::Escape) {
                Some(NavCommand::Close)
            } else {
                None
            }
        });
        if let Some(cmd) = key {
            if !view.handle(cmd) {
                self.detail = None;
                return;
            }
        }

        let id = view.current();
        let (position, total) = view.position();
        let Some(item) = self.catalog.get(id) else {
            self.detail = None;
            return;
        };

        let mut open = true;
        let mut nav = None;
        egui::Window::new(item.display_name())
            .id(egui::Id::new("item_detail"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_max_width(DETAIL_IMAGE_MAX);

                match self.texture_for(item) {
                    Some(tex) => {
                        ui.add(
                            egui::Image::new(tex)
                                .max_size(egui::vec2(DETAIL_IMAGE_MAX, DETAIL_IMAGE_MAX))
                                .rounding(6.0),
                        );
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(DETAIL_IMAGE_MAX, DETAIL_IMAGE_MAX * 0.75),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(
                            rect,
                            6.0,
                            placeholder_color(self.dark_mode, self.image_failed(item)),
                        );
                    }
                }
                ui.add_space(8.0);

                if !item.has_details() {
                    ui.label(egui::RichText::new("No notes yet.").italics().color(egui::Color32::GRAY));
                }

                egui::Grid::new("detail_fields")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        let fields = [
                            ("Colour", item.color.as_str()),
                            ("From", item.country.as_str()),
                            ("Used for", item.used_for.as_str()),
                        ];
                        for (label, value) in fields {
                            if value.trim().is_empty() {
                                continue;
                            }
                            ui.label(egui::RichText::new(label).color(egui::Color32::GRAY));
                            ui.label(value);
                            ui.end_row();
                        }

                        if item.acquired != Acquisition::Unknown {
                            ui.label(egui::RichText::new("Acquired").color(egui::Color32::GRAY));
                            acquisition_chip(ui, item.acquired);
                            ui.end_row();
                        }

                        if !item.price.trim().is_empty() {
                            let price = format_price(&item.price);
                            ui.label(egui::RichText::new("Price").color(egui::Color32::GRAY));
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(price.display).strong());
                                if let Some(converted) = price.converted {
                                    ui.label(egui::RichText::new(converted).color(egui::Color32::GRAY));
                                }
                            });
                            ui.end_row();
                        }

                        if let Some(host) = link_host(&item.link) {
                            ui.label(egui::RichText::new("Link").color(egui::Color32::GRAY));
                            ui.hyperlink_to(host, item.link.trim());
                            ui.end_row();
                        }
                    });

                if !item.story.is_empty() {
                    ui.add_space(8.0);
                    ui.label(item.story.as_str());
                }

                ui.add_space(8.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("\u{25C0}").clicked() {
                        nav = Some(NavCommand::Prev);
                    }
                    ui.label(format!("{} / {}", position, total));
                    if ui.button("\u{25B6}").clicked() {
                        nav = Some(NavCommand::Next);
                    }
                });
            });

        if !open {
            self.detail = None;
        } else if let (Some(cmd), Some(view)) = (nav, self.detail.as_mut()) {
            view.handle(cmd);
        }
    }
}

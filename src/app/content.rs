//! Content-area rendering for `GalleryApp`.
//!
//! - `draw_content`: top-level dispatcher over the view mode
//! - `draw_grid` / `draw_list`: plain views of the filtered selection
//! - `draw_canvas`: the scattered canvas (drag, parallax, float, blur)
//! - `draw_loader`: start-up counter overlay

use eframe::egui;

use curio_gallery::catalog::ItemId;
use curio_gallery::interaction::{Point, Size};
use curio_gallery::layout::ViewportClass;
use curio_gallery::motion::float_bob;
use curio_gallery::price::format_price;
use curio_gallery::view::{grid_columns, scatter_canvas_height, ViewMode};

use super::GalleryApp;
use crate::ui::{
    acquisition_chip, image_tile, paint_rotated_image, paint_rotated_rect, placeholder_color,
    scale_rect, truncate_str,
};

/// Scale of the item under the pointer while it is dragged.
const DRAG_SCALE: f32 = 1.05;
const GRID_GAP: f32 = 12.0;
const LIST_THUMB: f32 = 72.0;

impl GalleryApp {
    /// Draw the active view. Opens the detail modal for a clicked item.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.visible_ids().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("Nothing matches these filters.").color(egui::Color32::GRAY));
            });
            return;
        }

        let clicked = match self.view_mode {
            ViewMode::Grid => self.draw_grid(ui),
            ViewMode::List => self.draw_list(ui),
            ViewMode::Scattered => self.draw_canvas(ui, ctx),
        };
        if let Some(id) = clicked {
            self.open_detail(id);
        }
    }

    // ── Grid ─────────────────────────────────────────────────────────────────

    fn draw_grid(&self, ui: &mut egui::Ui) -> Option<ItemId> {
        let ids = self.visible_ids();
        let mut clicked = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width();
                let cols = grid_columns(ViewportClass::from_width(width));
                let tile = ((width - GRID_GAP * (cols - 1) as f32) / cols as f32).max(40.0);

                for row in ids.chunks(cols) {
                    ui.horizontal_top(|ui| {
                        ui.spacing_mut().item_spacing.x = GRID_GAP;
                        for &id in row {
                            let Some(item) = self.catalog.get(id) else {
                                continue;
                            };
                            ui.vertical(|ui| {
                                ui.set_width(tile);
                                let placeholder =
                                    placeholder_color(self.dark_mode, self.image_failed(item));
                                let size = egui::vec2(tile, tile);
                                if image_tile(ui, self.texture_for(item), size, placeholder).clicked() {
                                    clicked = Some(id);
                                }
                                ui.label(
                                    egui::RichText::new(truncate_str(&item.display_name(), 32))
                                        .strong(),
                                );
                                if !item.country.is_empty() {
                                    ui.label(
                                        egui::RichText::new(&item.country)
                                            .small()
                                            .color(egui::Color32::GRAY),
                                    );
                                }
                            });
                        }
                    });
                    ui.add_space(GRID_GAP);
                }
            });
        clicked
    }

    // ── List ─────────────────────────────────────────────────────────────────

    fn draw_list(&self, ui: &mut egui::Ui) -> Option<ItemId> {
        let ids = self.visible_ids();
        let mut clicked = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for id in ids {
                    let Some(item) = self.catalog.get(id) else {
                        continue;
                    };
                    let row = ui.horizontal(|ui| {
                        let placeholder = placeholder_color(self.dark_mode, self.image_failed(item));
                        let thumb = image_tile(
                            ui,
                            self.texture_for(item),
                            egui::vec2(LIST_THUMB, LIST_THUMB),
                            placeholder,
                        );
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(item.display_name()).strong());
                                acquisition_chip(ui, item.acquired);
                            });
                            let meta: Vec<&str> = [item.country.as_str(), item.color.as_str()]
                                .into_iter()
                                .filter(|s| !s.trim().is_empty())
                                .collect();
                            if !meta.is_empty() {
                                ui.label(
                                    egui::RichText::new(meta.join(" \u{00B7} "))
                                        .small()
                                        .color(egui::Color32::GRAY),
                                );
                            }
                            if !item.story.is_empty() {
                                ui.label(truncate_str(&item.story, 140));
                            }
                            if !item.price.is_empty() {
                                ui.label(egui::RichText::new(format_price(&item.price).display).monospace());
                            }
                        });
                        thumb.clicked()
                    });
                    let row_clicked = row.response.interact(egui::Sense::click()).clicked();
                    if row.inner || row_clicked {
                        clicked = Some(id);
                    }
                    ui.separator();
                }
            });
        clicked
    }

    // ── Scattered canvas ─────────────────────────────────────────────────────

    fn draw_canvas(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Option<ItemId> {
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let now = ctx.input(|i| i.time);
        let t = self.app_start.elapsed().as_secs_f32();

        let pointer_norm = ctx.input(|i| {
            let screen = i.screen_rect();
            i.pointer.hover_pos().map_or((0.0, 0.0), |p| {
                (
                    (p.x - screen.left()) / screen.width().max(1.0) - 0.5,
                    (p.y - screen.top()) / screen.height().max(1.0) - 0.5,
                )
            })
        });
        self.motion
            .update(pointer_norm, self.scroll_velocity.velocity(), dt);

        let mut clicked = None;
        let output = egui::ScrollArea::vertical()
            .drag_to_scroll(false)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let width = ui.available_width();
                if (width - self.session.viewport_width()).abs() > 0.5 {
                    self.session.resize(width);
                }
                let height = scatter_canvas_height(
                    width,
                    self.session.viewport(),
                    self.session.item_ids().len(),
                    ui.available_height(),
                );
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
                let visible = rect.intersect(ui.clip_rect());
                clicked = self.canvas_pointer(ui, rect, visible);
                self.paint_canvas(ui, rect, t);
            });
        self.scroll_velocity.sample(output.state.offset.y, now);

        // float and springs run continuously
        ctx.request_repaint();
        clicked
    }

    /// Route raw pointer input into the session. Returns an item to open
    /// when a press and release stayed within the click threshold.
    fn canvas_pointer(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        visible: egui::Rect,
    ) -> Option<ItemId> {
        if self.detail.is_some() {
            self.session.cancel_drag();
            return None;
        }

        let (pressed, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });
        let container = Size::new(rect.width(), rect.height());
        let to_local = |p: egui::Pos2| Point::new(p.x - rect.left(), p.y - rect.top());
        // Resting items are painted shifted by the parallax offset.
        let (px, py) = self.motion.parallax();
        let to_painted = |p: egui::Pos2| Point::new(p.x - rect.left() - px, p.y - rect.top() - py);
        // Popups and windows above the canvas swallow the pointer.
        let inside = pos
            .filter(|p| visible.contains(*p))
            .filter(|p| ui.ctx().layer_id_at(*p) == Some(ui.layer_id()));

        if pressed {
            if let Some(p) = inside {
                if let Some(id) = self
                    .session
                    .hit_test(to_painted(p), container, |id| self.height_ratio(id))
                {
                    self.session.begin_drag(id, to_local(p));
                }
            }
        }

        if self.session.is_dragging() {
            match inside {
                Some(p) => {
                    self.session.update_drag(to_local(p), container);
                }
                None => self.session.cancel_drag(),
            }
        }

        let mut clicked = None;
        if released {
            if let Some(release) = self.session.end_drag() {
                clicked = release.selected();
            }
        }

        if self.session.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if let Some(p) = inside {
            let over_item = self
                .session
                .hit_test(to_painted(p), container, |id| self.height_ratio(id))
                .is_some();
            if over_item {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
        }
        clicked
    }

    fn paint_canvas(&self, ui: &egui::Ui, rect: egui::Rect, t: f32) {
        let painter = ui.painter_at(rect);
        let (px, py) = self.motion.parallax();
        let effects = self.motion.effects();
        let dragging = self.session.dragging_item();
        let ids = self.session.item_ids();

        for id in self.session.painter_order() {
            let Some(item) = self.catalog.get(id) else {
                continue;
            };
            let index = ids.iter().position(|&i| i == id).unwrap_or(0);
            let p = self.session.placement_or_fallback(id, index);

            let w = p.width * 0.01 * rect.width();
            let h = w * self.height_ratio(id);
            let base = egui::Rect::from_min_size(
                rect.min + egui::vec2(p.left * 0.01 * rect.width(), p.top * 0.01 * rect.height()),
                egui::vec2(w, h),
            );
            let angle = p.rotation_radians();
            let is_dragged = dragging == Some(id);

            let frame = if is_dragged {
                scale_rect(base, DRAG_SCALE, DRAG_SCALE)
            } else {
                let pose = float_bob(t, index);
                let moved = base.translate(egui::vec2(px, py + pose.dy));
                scale_rect(moved, effects.squash * pose.scale, effects.stretch * pose.scale)
            };

            let (shadow_dy, shadow_alpha) = if is_dragged { (10.0, 60) } else { (4.0, 28) };
            paint_rotated_rect(
                &painter,
                frame.translate(egui::vec2(0.0, shadow_dy)),
                angle,
                egui::Color32::from_black_alpha(shadow_alpha),
            );

            match self.texture_for(item) {
                Some(tex) => {
                    paint_rotated_image(&painter, tex.id(), frame, angle, egui::Color32::WHITE);
                    if !is_dragged && effects.blur > 0.05 {
                        // Motion blur: faint copies trailing along the scroll axis.
                        let ghost =
                            egui::Color32::from_white_alpha((effects.blur / 1.2 * 70.0) as u8);
                        for dy in [-2.0 * effects.blur, 2.0 * effects.blur] {
                            paint_rotated_image(
                                &painter,
                                tex.id(),
                                frame.translate(egui::vec2(0.0, dy)),
                                angle,
                                ghost,
                            );
                        }
                    }
                }
                None => paint_rotated_rect(
                    &painter,
                    frame,
                    angle,
                    placeholder_color(self.dark_mode, self.image_failed(item)),
                ),
            }
        }
    }

    // ── Loader overlay ───────────────────────────────────────────────────────

    /// Advance and paint the start-up counter until it has faded out.
    pub fn draw_loader(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.loader.update(dt, self.image_loader.is_idle());
        if self.loader.is_done() {
            return;
        }

        let alpha = self.loader.overlay_alpha();
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("loader"),
        ));
        let (bg, fg) = if self.dark_mode {
            (egui::Color32::from_gray(18), egui::Color32::from_gray(230))
        } else {
            (egui::Color32::from_gray(250), egui::Color32::from_gray(20))
        };
        painter.rect_filled(screen, 0.0, bg.gamma_multiply(alpha));
        painter.text(
            screen.center(),
            egui::Align2::CENTER_CENTER,
            format!("{:03}", self.loader.counter()),
            egui::FontId::proportional(64.0),
            fg.gamma_multiply(alpha),
        );

        let done = self.image_loader.loaded_count() + self.image_loader.failed_count();
        let total = done + self.image_loader.pending_count();
        painter.text(
            screen.center() + egui::vec2(0.0, 52.0),
            egui::Align2::CENTER_CENTER,
            format!("{} / {} images", done, total),
            egui::FontId::proportional(14.0),
            egui::Color32::GRAY.gamma_multiply(alpha),
        );
        ctx.request_repaint();
    }
}

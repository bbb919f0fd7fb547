//! Main application state and eframe integration.

use chrono::NaiveDate;
use egui::{CentralPanel, Context, Key, SidePanel, TopBottomPanel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shelfpack_core::{
    AssetCatalog, DragPayload, InventorySnapshot, PackConfig, PlacedBox, ShelfPacker,
};
use shelfpack_core::config::{PALETTE_HEIGHT_RANGE, PALETTE_WIDTH_RANGE};

use crate::canvas;
use crate::theme;
use crate::transform;

/// Number of draggable boxes offered in the palette.
const PALETTE_SIZE: usize = 6;

/// Main application state.
pub struct ViewerApp {
    /// The packing model behind the canvas
    packer: ShelfPacker,
    /// Snapshot rendered this frame (refreshed after every mutation)
    snapshot: InventorySnapshot,

    /// Asset catalog shown in the assets window
    catalog: AssetCatalog,
    /// Reference date for calibration coloring
    today: NaiveDate,

    /// Palette of candidate box sizes
    palette: Vec<DragPayload>,
    /// Box currently being dragged from the palette
    drag: Option<DragPayload>,
    /// Placement preview while dragging (shelf, candidate)
    preview: Option<(usize, PlacedBox)>,
    /// Shelf under the pointer where the dragged box does not fit
    preview_blocked: Option<usize>,

    /// Box currently under the pointer
    hovered: Option<(usize, usize)>,
    /// Currently selected box
    selected: Option<(usize, usize)>,
    /// Box the open context menu refers to
    context_target: Option<(usize, usize)>,

    /// Show the assets window
    show_assets: bool,
    /// Asset search query
    search_query: String,
    /// Asset picked in the results table, shown in the detail strip
    detail_asset: Option<usize>,

    /// Status message
    status_message: String,

    /// RNG for layout regeneration and palette refills
    rng: StdRng,
}

impl ViewerApp {
    /// Create a new viewer application with a generated starting layout.
    pub fn new(_cc: &eframe::CreationContext<'_>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let config = PackConfig::default();
        let mut packer = ShelfPacker::new(config.shelf_count, config.padding);
        packer.generate(&config, &mut rng);
        let snapshot = packer.snapshot();

        let today = chrono::Local::now().date_naive();
        let catalog = AssetCatalog::sample(500, today, &mut rng);
        let palette = Self::draw_palette(&mut rng);

        let total = snapshot.total_boxes();
        Self {
            packer,
            snapshot,
            catalog,
            today,
            palette,
            drag: None,
            preview: None,
            preview_blocked: None,
            hovered: None,
            selected: None,
            context_target: None,
            show_assets: false,
            search_query: String::new(),
            detail_asset: None,
            status_message: format!("Generated layout with {} boxes", total),
            rng,
        }
    }

    /// Draw a fresh set of palette box sizes.
    fn draw_palette(rng: &mut StdRng) -> Vec<DragPayload> {
        (0..PALETTE_SIZE)
            .map(|_| {
                let width = rng.gen_range(PALETTE_WIDTH_RANGE.0..=PALETTE_WIDTH_RANGE.1);
                let height = rng.gen_range(PALETTE_HEIGHT_RANGE.0..=PALETTE_HEIGHT_RANGE.1);
                DragPayload { width, height }
            })
            .collect()
    }

    /// Regenerate the layout from scratch.
    fn new_layout(&mut self) {
        let config = PackConfig::default();
        self.packer.generate(&config, &mut self.rng);
        self.refresh_snapshot();
        self.selected = None;
        self.hovered = None;
        self.status_message = format!(
            "Generated layout with {} boxes",
            self.snapshot.total_boxes()
        );
    }

    /// Pull a fresh snapshot from the packer after a mutation.
    fn refresh_snapshot(&mut self) {
        self.snapshot = self.packer.snapshot();
    }

    /// Commit the current drag preview, if any.
    fn commit_drag(&mut self) {
        if let (Some(payload), Some((shelf, candidate))) = (self.drag.take(), self.preview.take()) {
            match self.packer.place(shelf, candidate) {
                Ok(()) => {
                    self.refresh_snapshot();
                    self.status_message = format!(
                        "Placed {:.2}×{:.2} on shelf {} at {:.2}",
                        payload.width,
                        payload.height,
                        shelf + 1,
                        candidate.offset
                    );
                }
                Err(e) => {
                    self.status_message = format!("Placement failed: {}", e);
                    tracing::error!("place failed: {}", e);
                }
            }
        }
        self.drag = None;
        self.preview = None;
        self.preview_blocked = None;
    }

    /// Remove a placed box and report the result.
    fn remove_box(&mut self, shelf: usize, index: usize) {
        match self.packer.remove(shelf, index) {
            Ok(removed) => {
                self.refresh_snapshot();
                if self.selected == Some((shelf, index)) {
                    self.selected = None;
                }
                self.status_message = format!(
                    "Removed {} from shelf {}",
                    removed.size_label(),
                    shelf + 1
                );
            }
            Err(e) => {
                self.status_message = format!("Remove failed: {}", e);
                tracing::error!("remove failed: {}", e);
            }
        }
    }

    /// Render the menu bar.
    fn render_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Layout (Ctrl+N)").clicked() {
                        self.new_layout();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Ctrl+Q)").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_assets, "Assets Window (A)");
                });
            });
        });
    }

    /// Render the left inventory table panel.
    fn render_inventory(&mut self, ctx: &Context) {
        SidePanel::left("inventory")
            .min_width(180.0)
            .max_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Inventory");
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("inventory_grid")
                        .striped(true)
                        .num_columns(3)
                        .show(ui, |ui| {
                            ui.strong("Shelf");
                            ui.strong("Size");
                            ui.strong("Index");
                            ui.end_row();

                            let mut clicked = None;
                            for row in self.snapshot.rows() {
                                let key = (row.shelf - 1, row.index);
                                let selected = self.selected == Some(key);
                                if ui
                                    .selectable_label(selected, row.shelf.to_string())
                                    .clicked()
                                {
                                    clicked = Some(key);
                                }
                                ui.label(&row.size);
                                ui.label(row.index.to_string());
                                ui.end_row();
                            }
                            if let Some(key) = clicked {
                                self.selected = Some(key);
                            }
                        });
                });

                ui.separator();
                ui.label(format!(
                    "{} box(es) on {} shelf(ves)",
                    self.snapshot.total_boxes(),
                    self.snapshot.shelf_count()
                ));
            });
    }

    /// Render the right palette panel.
    fn render_palette(&mut self, ctx: &Context) {
        SidePanel::right("palette")
            .min_width(140.0)
            .max_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Palette");
                ui.separator();
                ui.label("Click a box, then drop it on a shelf.");
                ui.add_space(8.0);

                let mut picked = None;
                for (i, payload) in self.palette.iter().enumerate() {
                    let label = format!("{:.2}×{:.2}", payload.width, payload.height);
                    let active = self.drag.as_ref() == Some(payload);
                    if ui.selectable_label(active, label).clicked() {
                        picked = Some(i);
                    }
                }
                if let Some(i) = picked {
                    self.drag = Some(self.palette[i]);
                    self.preview = None;
                    self.preview_blocked = None;
                    self.status_message = "Drop the box on a shelf, Esc to cancel".to_string();
                }

                ui.add_space(8.0);
                if ui.button("Refill palette").clicked() {
                    self.palette = Self::draw_palette(&mut self.rng);
                }

                if self.drag.is_some() {
                    ui.separator();
                    if ui.button("Cancel drag (Esc)").clicked() {
                        self.drag = None;
                        self.preview = None;
                        self.preview_blocked = None;
                    }
                }
            });
    }

    /// Render the status bar.
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some((shelf, index)) = self.selected {
                        ui.label(format!("Selected: shelf {}, box {}", shelf + 1, index));
                    }
                });
            });
        });
    }

    /// Render the assets window with search and recently viewed tables.
    fn render_assets_window(&mut self, ctx: &Context) {
        if !self.show_assets {
            return;
        }

        let mut open = self.show_assets;
        egui::Window::new("Assets")
            .open(&mut open)
            .default_width(460.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    ui.text_edit_singleline(&mut self.search_query);
                });
                ui.separator();

                let mut viewed = None;

                ui.strong("Search Results");
                let hits = self.catalog.search(&self.search_query);
                if hits.is_empty() {
                    ui.label(
                        egui::RichText::new("No matching assets").color(theme::DIM_TEXT),
                    );
                } else {
                    egui::ScrollArea::vertical()
                        .id_salt("search_results")
                        .max_height(220.0)
                        .show(ui, |ui| {
                            egui::Grid::new("search_grid").num_columns(4).show(ui, |ui| {
                                for (index, asset) in &hits {
                                    let color = theme::calibration_color(
                                        asset.calibration_status(self.today),
                                    );
                                    if ui
                                        .selectable_label(
                                            self.detail_asset == Some(*index),
                                            egui::RichText::new(&asset.description)
                                                .color(color),
                                        )
                                        .clicked()
                                    {
                                        viewed = Some(*index);
                                    }
                                    ui.label(&asset.part_number);
                                    ui.label(asset.last_calibration.to_string());
                                    ui.label(
                                        egui::RichText::new(
                                            asset.calibration_due.to_string(),
                                        )
                                        .color(color),
                                    );
                                    ui.end_row();
                                }
                            });
                        });
                }

                ui.separator();
                ui.strong("Recently Viewed");
                egui::ScrollArea::vertical()
                    .id_salt("recently_viewed")
                    .max_height(160.0)
                    .show(ui, |ui| {
                        egui::Grid::new("recent_grid").num_columns(3).show(ui, |ui| {
                            for asset in self.catalog.recently_viewed() {
                                ui.label(&asset.description);
                                ui.label(&asset.part_number);
                                ui.label(asset.calibration_due.to_string());
                                ui.end_row();
                            }
                        });
                    });

                if let Some(index) = viewed {
                    self.catalog.mark_viewed(index);
                    self.detail_asset = Some(index);
                }

                if let Some(asset) = self.detail_asset.and_then(|i| self.catalog.assets().get(i))
                {
                    ui.separator();
                    ui.strong("Asset Info");
                    ui.label(format!("Description: {}", asset.description));
                    ui.horizontal(|ui| {
                        ui.label(format!("Part Number: {}", asset.part_number));
                        ui.label(format!("Serial Number: {}", asset.serial_number));
                    });
                }
            });
        self.show_assets = open;
    }

    /// Render the central bookshelf canvas and handle pointer interaction.
    fn render_canvas(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(available, egui::Sense::click());
            let painter = ui.painter_at(available);

            let geometry = transform::geometry_for_rect(available, self.packer.shelf_count());

            // Pointer tracking: hover when idle, preview when dragging
            self.hovered = None;
            if self.drag.is_none() {
                self.preview = None;
                self.preview_blocked = None;
            }

            if let Some(pos) = response.hover_pos() {
                let local = transform::to_local(pos, available);

                if let Some(payload) = self.drag {
                    self.preview = None;
                    self.preview_blocked = None;
                    if let Some(shelf) = geometry.shelf_at_y(local.y) {
                        match self.packer.find_placement(shelf, payload.width, payload.height)
                        {
                            Ok(Some(candidate)) => self.preview = Some((shelf, candidate)),
                            Ok(None) => self.preview_blocked = Some(shelf),
                            Err(e) => {
                                self.status_message = format!("Invalid drop: {}", e);
                                self.drag = None;
                            }
                        }
                    }
                } else {
                    self.hovered = self.packer.hit_test(local.x, local.y, &geometry);
                }
            }

            // Commit or select on click
            if response.clicked() {
                if self.drag.is_some() {
                    if self.preview.is_some() {
                        self.commit_drag();
                    } else {
                        self.status_message = "Does not fit there".to_string();
                    }
                } else {
                    self.selected = self.hovered;
                }
            }

            // Context menu on a placed box. The target is latched on the
            // right-click so the menu survives the pointer moving onto it.
            if response.secondary_clicked() {
                self.context_target = self.hovered;
            }
            response.clone().context_menu(|ui| {
                if let Some((shelf, index)) = self.context_target {
                    ui.label(format!("Shelf {}, box {}", shelf + 1, index));
                    if ui.button("Remove box").clicked() {
                        self.remove_box(shelf, index);
                        self.context_target = None;
                        ui.close_menu();
                    }
                } else {
                    ui.label(egui::RichText::new("Empty shelf space").color(theme::DIM_TEXT));
                }
            });

            canvas::render_bookshelf(
                &painter,
                &self.snapshot,
                &geometry,
                available,
                self.hovered,
                self.selected,
                self.preview,
                self.preview_blocked,
            );
        });
    }

    /// Handle global keyboard shortcuts.
    fn handle_keys(&mut self, ctx: &Context) {
        // Read input first; acting inside the input closure can deadlock
        let (escape, assets, new_layout, quit) = ctx.input(|i| {
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::A) && !i.modifiers.any(),
                i.modifiers.ctrl && i.key_pressed(Key::N),
                i.modifiers.ctrl && i.key_pressed(Key::Q),
            )
        });

        if escape {
            self.drag = None;
            self.preview = None;
            self.preview_blocked = None;
            self.selected = None;
        }
        if assets {
            self.show_assets = !self.show_assets;
        }
        if new_layout {
            self.new_layout();
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.render_menu(ctx);
        self.render_inventory(ctx);
        self.render_palette(ctx);
        self.render_status_bar(ctx);
        self.render_assets_window(ctx);
        self.render_canvas(ctx);
    }
}

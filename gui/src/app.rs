use std::time::Instant;

use eframe::egui::{self, Align2, Color32, Context, Key, Sense, Ui};
use life_core::{engine, Brush, Grid, GridDimensions, GridError, Scheduler};

use crate::board::BoardLayout;
use crate::config::AppConfig;

/// Primary-button state as seen by the board widget for one frame.
#[derive(Debug, Default, Clone, Copy)]
struct BoardPointer {
    /// Pressed this frame, on the board.
    pressed: bool,
    /// Held down with the interaction owned by the board.
    held: bool,
    /// Released this frame, anywhere.
    released: bool,
    /// Cell under the pointer, if any.
    cell: Option<usize>,
}

pub struct GridOfLife {
    columns_input: String,
    rows_input: String,
    /// `None` while the size menu is shown.
    grid: Option<Grid>,
    scheduler: Scheduler,
    brush: Brush,
    /// Blocking message, shown until dismissed.
    prompt: Option<String>,
    cell_size: f32,
    cell_gap: f32,
    alive_color: Color32,
    dead_color: Color32,
}

impl GridOfLife {
    pub fn new(config: &AppConfig) -> Self {
        let [ar, ag, ab] = config.appearance.alive_color;
        let [dr, dg, db] = config.appearance.dead_color;
        Self {
            columns_input: config.grid.columns.to_string(),
            rows_input: config.grid.rows.to_string(),
            grid: None,
            scheduler: Scheduler::new(),
            brush: Brush::new(),
            prompt: None,
            cell_size: config.appearance.cell_size,
            cell_gap: config.appearance.cell_gap,
            alive_color: Color32::from_rgb(ar, ag, ab),
            dead_color: Color32::from_rgb(dr, dg, db),
        }
    }

    fn dimensions(&mut self) -> Option<GridDimensions> {
        match GridDimensions::parse(&self.columns_input, &self.rows_input) {
            Ok(dimensions) => Some(dimensions),
            Err(err) => {
                log::warn!(
                    "rejected grid size {:?}x{:?}: {err}",
                    self.columns_input,
                    self.rows_input
                );
                self.prompt = Some(err.to_string());
                None
            }
        }
    }

    fn create_grid(&mut self) {
        if let Some(dimensions) = self.dimensions() {
            log::info!(
                "new {}x{} grid",
                dimensions.columns(),
                dimensions.rows()
            );
            self.scheduler.stop();
            self.scheduler.reset_generation();
            self.brush.release();
            self.grid = Some(Grid::new(dimensions));
        }
    }

    fn back_to_menu(&mut self) {
        self.scheduler.stop();
        self.brush.release();
        self.grid = None;
    }

    fn start(&mut self) {
        if self.dimensions().is_some() {
            log::info!("start");
            self.scheduler.start(Instant::now());
        }
    }

    fn report(err: GridError) {
        log::error!("grid contract violated: {err}");
    }

    fn menu(&mut self, ui: &mut Ui) {
        ui.label("Choose the size of the grid, then press Enter.");
        let mut submitted = false;
        egui::Grid::new("size_inputs").show(ui, |ui| {
            ui.label("Columns");
            let response = ui.text_edit_singleline(&mut self.columns_input);
            submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            ui.end_row();

            ui.label("Rows");
            let response = ui.text_edit_singleline(&mut self.rows_input);
            submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            ui.end_row();
        });
        if ui.button("Create").clicked() || submitted {
            self.create_grid();
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("▶ Start").clicked() {
                self.start();
            }
            if ui.button("⏹ Stop").clicked() {
                log::info!("stop");
                self.scheduler.stop();
            }
            if ui.button("Step").clicked() {
                if let Some(grid) = self.grid.as_mut() {
                    if let Err(err) = engine::step(grid) {
                        Self::report(err);
                    }
                }
            }
            if ui.button("Clear").clicked() {
                if let Some(grid) = self.grid.as_mut() {
                    grid.clear();
                }
                self.scheduler.reset_generation();
            }
            if ui.button("Random").clicked() {
                if let Some(grid) = self.grid.as_mut() {
                    grid.randomize();
                }
                self.scheduler.reset_generation();
            }
            ui.separator();
            if ui.button("New grid").clicked() {
                self.back_to_menu();
            }
        });
    }

    fn status(&self, ui: &mut Ui) {
        let Some(grid) = self.grid.as_ref() else {
            return;
        };
        ui.horizontal(|ui| {
            ui.label(if self.scheduler.is_running() {
                "Running"
            } else {
                "Stopped"
            });
            ui.separator();
            ui.label(format!("Generation: {}", self.scheduler.generation()));
            ui.separator();
            ui.label(format!("Population: {} / {}", grid.population(), grid.len()));
        });
    }

    fn board(&mut self, ui: &mut Ui) {
        let Some(grid) = self.grid.as_ref() else {
            return;
        };
        let layout = BoardLayout::new(self.cell_size, self.cell_gap, grid.columns(), grid.rows());
        let (rect, response) = ui.allocate_exact_size(layout.size(), Sense::click_and_drag());
        let layout = layout.at(rect.min);

        // Only pointer activity egui routes to the board counts, so drags on
        // scroll bars or windows drawn above it never paint.
        let held = response.is_pointer_button_down_on();
        let (pressed, released) =
            ui.input(|i| (i.pointer.primary_pressed(), i.pointer.primary_released()));
        self.handle_pointer(BoardPointer {
            pressed: pressed && held,
            held,
            released,
            cell: response
                .interact_pointer_pos()
                .and_then(|pos| layout.cell_at(pos)),
        });

        let Some(grid) = self.grid.as_ref() else {
            return;
        };
        let painter = ui.painter_at(rect);
        for (index, cell) in grid.cells().iter().enumerate() {
            let color = if cell.is_alive() {
                self.alive_color
            } else {
                self.dead_color
            };
            painter.rect_filled(layout.cell_rect(index), 2.0, color);
        }
    }

    fn handle_pointer(&mut self, pointer: BoardPointer) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        let painted = match (pointer.pressed, pointer.held, pointer.cell) {
            (true, _, Some(cell)) => self.brush.press(cell, grid),
            (false, true, Some(_)) => self.brush.hover(pointer.cell, grid),
            (_, true, None) => {
                self.brush.leave();
                Ok(())
            }
            _ => Ok(()),
        };
        if let Err(err) = painted {
            Self::report(err);
        }
        if pointer.released {
            self.brush.release();
        }
    }

    fn show_prompt(&mut self, ctx: &Context) {
        let Some(message) = self.prompt.clone() else {
            return;
        };
        egui::Window::new("Invalid size")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.prompt = None;
                }
            });
    }
}

impl eframe::App for GridOfLife {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Some(grid) = self.grid.as_mut() {
            if let Err(err) = self.scheduler.poll(Instant::now(), grid) {
                Self::report(err);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                let blocked = self.prompt.is_some();
                ui.add_enabled_ui(!blocked, |ui| {
                    if self.grid.is_none() {
                        self.menu(ui);
                    } else {
                        self.controls(ui);
                        self.status(ui);
                        ui.separator();
                        self.board(ui);
                    }
                });
            });
        });
        self.show_prompt(ctx);

        if let Some(wait) = self.scheduler.until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

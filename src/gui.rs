use eframe::egui;

use crate::board::{Cell, Side};
use crate::engine::EngineState;
use crate::square::Square;
use crate::terminal::GameOutcome;

/// Two players at one window: click a pawn, then click where it should go.
pub struct PawnsGUI {
    state: EngineState,
    /// The position the window opened with, restored by "New game"
    initial: EngineState,
    selected_square: Option<Square>,
    message: String,
    white: String,
    black: String,
}

impl PawnsGUI {
    fn new(_cc: &eframe::CreationContext<'_>, state: EngineState, white: String, black: String) -> Self {
        Self {
            initial: state.clone(),
            state,
            selected_square: None,
            message: String::new(),
            white,
            black,
        }
    }

    fn handle_square_click(&mut self, square: Square) {
        if self.state.outcome().is_over() {
            return;
        }
        let side = self.state.side_to_move();

        let Some(selected) = self.selected_square else {
            if self.state.board().owned_by(square, side) {
                self.selected_square = Some(square);
            }
            return;
        };

        // clicking another own pawn switches the selection
        if square != selected && self.state.board().owned_by(square, side) {
            self.selected_square = Some(square);
            return;
        }

        self.selected_square = None;
        if square == selected {
            return;
        }
        match self.state.apply_move(selected, square) {
            Ok(applied) => {
                log::info!("{} played {}", applied.mv.side, applied.mv);
                self.message.clear();
            }
            Err(err) => self.message = err.to_string(),
        }
    }

    fn status(&self) -> String {
        match self.state.outcome() {
            GameOutcome::InProgress => {
                let name = match self.state.side_to_move() {
                    Side::White => &self.white,
                    Side::Black => &self.black,
                };
                format!("{name} ({}) to move", self.state.side_to_move())
            }
            GameOutcome::Win(Side::White) => format!("{} (white) wins!", self.white),
            GameOutcome::Win(Side::Black) => format!("{} (black) wins!", self.black),
            GameOutcome::Draw => "Stalemate!".to_string(),
        }
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let board_size = ui.available_width().min(ui.available_height()) - 40.0;
        let square_size = board_size / 8.0;

        let board_rect = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(board_size, board_size));
        let board_response = ui.allocate_rect(board_rect, egui::Sense::click());

        let targets: Vec<Square> = match self.selected_square {
            Some(selected) => self
                .state
                .legal_moves()
                .into_iter()
                .filter(|(mv, _)| mv.from == selected)
                .map(|(mv, _)| mv.to)
                .collect(),
            None => Vec::new(),
        };

        let mut clicked = None;
        for rank in 1..=8u8 {
            for file in 0..8u8 {
                let Ok(square) = Square::new(file, rank) else {
                    continue;
                };
                let rect = egui::Rect::from_min_size(
                    egui::pos2(
                        board_rect.min.x + file as f32 * square_size,
                        board_rect.min.y + (8 - rank) as f32 * square_size,
                    ),
                    egui::vec2(square_size, square_size),
                );

                let is_light = (rank + file) % 2 == 0;
                let color = if Some(square) == self.selected_square {
                    egui::Color32::from_rgb(255, 255, 0)
                } else if is_light {
                    egui::Color32::from_rgb(240, 217, 181)
                } else {
                    egui::Color32::from_rgb(181, 136, 99)
                };
                ui.painter().rect_filled(rect, 0.0, color);

                if targets.contains(&square) {
                    ui.painter().circle_filled(
                        rect.center(),
                        square_size * 0.15,
                        egui::Color32::from_rgba_unmultiplied(40, 120, 40, 160),
                    );
                }

                let glyph = match self.state.board().cell_at(square) {
                    Cell::Empty => None,
                    Cell::WhitePawn => Some(("♙", egui::Color32::WHITE)),
                    Cell::BlackPawn => Some(("♟", egui::Color32::BLACK)),
                };
                if let Some((glyph, glyph_color)) = glyph {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        glyph,
                        egui::FontId::proportional(square_size * 0.8),
                        glyph_color,
                    );
                }

                if board_response.clicked() {
                    if let Some(mouse_pos) = board_response.interact_pointer_pos() {
                        if rect.contains(mouse_pos) {
                            clicked = Some(square);
                        }
                    }
                }
            }
        }

        if let Some(square) = clicked {
            self.handle_square_click(square);
        }
    }

    fn draw_status(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.status());
            if ui.button("New game").clicked() {
                self.state = self.initial.clone();
                self.selected_square = None;
                self.message.clear();
                log::info!("starting a new game");
            }
        });
        if !self.message.is_empty() {
            ui.label(egui::RichText::new(&self.message).color(egui::Color32::from_rgb(200, 100, 100)));
        }
    }
}

impl eframe::App for PawnsGUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            self.draw_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_board(ui);
        });
    }
}

pub fn run_gui(state: EngineState, white: String, black: String) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(720.0, 800.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Pawns-Only Chess",
        options,
        Box::new(|cc| Box::new(PawnsGUI::new(cc, state, white, black))),
    )
}

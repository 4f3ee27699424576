mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoger una pista en vuelo antes de pintar; mientras se espera,
        // seguimos repintando para que el poll corra.
        self.poll_pista();
        if self.hint_pending {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        // BOTÓN SUPERIOR DE ABANDONAR CASO (solo con un caso abierto)
        if matches!(
            self.state,
            AppState::CaseBriefing | AppState::Quiz | AppState::TierBreak | AppState::Results
        ) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::CaseBriefing => views::case_briefing::ui_case_briefing(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::TierBreak => views::tier_break::ui_tier_break(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}

use std::time::Instant;

use egui::RichText;

use horizon_state::domain::Domain;
use horizon_state::request::GenerateRequest;
use horizon_state::session::AppState;

use crate::{markdown, theme, toolbar};

pub fn business_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
) -> Option<GenerateRequest> {
    let mut request = None;
    let accent = theme::domain_accent(Domain::Business);

    ui.label(RichText::new("Business").color(accent).strong().size(24.0));
    ui.colored_label(
        theme::TEXT_DIM,
        "Reinvent workflows with intelligent automation and drafting.",
    );
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];
            ui.horizontal(|ui| {
                ui.label("Key Points / Context");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toolbar::undo_redo_toolbar(ui, &mut state.business.points);
                });
            });

            let mut points = state.business.points.value().clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut points)
                    .desired_rows(14)
                    .desired_width(f32::INFINITY)
                    .hint_text(
                        "- Reschedule project review to next Tuesday\n\
                         - Apologize for delay\n\
                         - Attach updated timeline",
                    ),
            );
            if response.changed() {
                state.business.points.set(points, now);
            }

            ui.add_space(6.0);
            let can_submit =
                !state.business.job.loading && !state.business.points.value().trim().is_empty();
            if ui
                .add_enabled(can_submit, egui::Button::new("Draft Email"))
                .clicked()
            {
                request = Some(GenerateRequest::DraftEmail {
                    points: state.business.points.value().clone(),
                });
            }
        }

        {
            let ui = &mut cols[1];
            if state.business.job.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new());
                    ui.colored_label(theme::TEXT_DIM, "Drafting email...");
                });
            } else if let Some(error) = &state.business.job.error {
                ui.colored_label(theme::ERROR, error);
            } else if state.business.email.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.colored_label(theme::TEXT_DIM, "Generated draft will appear here");
                });
            } else {
                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if state.business.copied_notice_visible(now) {
                            ui.colored_label(theme::SUCCESS, "Copied");
                        } else if ui
                            .button("Copy")
                            .on_hover_text("Copy to clipboard")
                            .clicked()
                        {
                            ui.ctx().copy_text(state.business.email.clone());
                            state.business.copied_at = Some(now);
                        }
                    });
                });
                egui::Frame::new()
                    .fill(theme::BG_CARD)
                    .corner_radius(theme::ROUNDING)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                markdown::markdown_view(ui, &state.business.email);
                            });
                    });
            }
        }
    });

    request
}

use std::time::Instant;

use egui::{Color32, RichText};

use horizon_backend::health::RiskLevel;
use horizon_state::domain::Domain;
use horizon_state::request::GenerateRequest;
use horizon_state::session::AppState;

use crate::{theme, toolbar};

fn risk_color(level: RiskLevel) -> Color32 {
    match level {
        RiskLevel::Low => Color32::from_rgb(52, 211, 153),
        RiskLevel::Moderate => Color32::from_rgb(250, 204, 21),
        RiskLevel::High => Color32::from_rgb(251, 146, 60),
        RiskLevel::Critical => Color32::from_rgb(248, 113, 113),
    }
}

pub fn health_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
) -> Option<GenerateRequest> {
    let mut request = None;
    let accent = theme::domain_accent(Domain::Health);

    ui.label(RichText::new("Predictive Health Monitor").color(accent).strong().size(24.0));
    ui.colored_label(
        theme::TEXT_DIM,
        "Analyze patient vitals and history to identify risks and alert providers.",
    );
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];
            ui.horizontal(|ui| {
                ui.label("Patient Data / History");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toolbar::undo_redo_toolbar(ui, &mut state.health.patient_data);
                });
            });

            let mut data = state.health.patient_data.value().clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut data)
                    .desired_rows(14)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace)
                    .hint_text(
                        "Enter vitals, symptoms, and medical history...\n\
                         e.g., Male 55, BP 145/95, resting HR 88, diabetic, reports shortness \
                         of breath.",
                    ),
            );
            if response.changed() {
                state.health.patient_data.set(data, now);
            }

            ui.add_space(6.0);
            let can_submit =
                !state.health.job.loading && !state.health.patient_data.value().trim().is_empty();
            if ui
                .add_enabled(can_submit, egui::Button::new("Analyze Risks"))
                .clicked()
            {
                request = Some(GenerateRequest::AnalyzeHealth {
                    patient_data: state.health.patient_data.value().clone(),
                });
            }
        }

        {
            let ui = &mut cols[1];
            if state.health.job.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new());
                    ui.colored_label(theme::TEXT_DIM, "Analyzing risks...");
                });
            } else if let Some(error) = &state.health.job.error {
                ui.colored_label(theme::ERROR, error);
            } else if let Some(analysis) = &state.health.analysis {
                let color = risk_color(analysis.risk_level);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{}", analysis.risk_score))
                            .color(color)
                            .strong()
                            .size(34.0),
                    );
                    ui.vertical(|ui| {
                        ui.colored_label(theme::TEXT_DIM, "RISK LEVEL");
                        ui.label(RichText::new(analysis.risk_level.label()).color(color).strong());
                    });
                });
                ui.colored_label(theme::TEXT_DIM, "score out of 100");
                ui.separator();

                if !analysis.alerts.is_empty() {
                    egui::Frame::new()
                        .fill(theme::ERROR.gamma_multiply(0.12))
                        .corner_radius(theme::ROUNDING)
                        .inner_margin(egui::Margin::same(8))
                        .show(ui, |ui| {
                            ui.colored_label(theme::ERROR, RichText::new("Critical Alerts").strong());
                            for alert in &analysis.alerts {
                                ui.colored_label(theme::ERROR, format!("• {alert}"));
                            }
                        });
                    ui.add_space(6.0);
                }

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.columns(2, |cols| {
                            {
                                let ui = &mut cols[0];
                                ui.label(RichText::new("Identified Factors").strong());
                                for risk in &analysis.identified_risks {
                                    ui.colored_label(theme::TEXT_DIM, format!("• {risk}"));
                                }
                            }
                            {
                                let ui = &mut cols[1];
                                ui.label(RichText::new("Recommendations").strong());
                                for rec in &analysis.recommendations {
                                    ui.colored_label(theme::TEXT_DIM, format!("• {rec}"));
                                }
                            }
                        });

                        if !analysis.summary.is_empty() {
                            ui.add_space(6.0);
                            ui.colored_label(
                                theme::TEXT_PRIMARY,
                                RichText::new(format!("\"{}\"", analysis.summary)).italics(),
                            );
                        }
                    });
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.colored_label(theme::TEXT_DIM, "Enter patient data to begin analysis");
                });
            }
        }
    });

    request
}

use std::time::Instant;

use egui::RichText;

use horizon_backend::tutor::TutorMode;
use horizon_state::domain::Domain;
use horizon_state::education::{Level, TeachingStyle};
use horizon_state::request::GenerateRequest;
use horizon_state::session::AppState;

use crate::{markdown, theme, toolbar};

pub fn education_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
) -> Option<GenerateRequest> {
    let mut request = None;
    let accent = theme::domain_accent(Domain::Education);

    ui.label(RichText::new("Education Reimagined").color(accent).strong().size(24.0));
    ui.colored_label(
        theme::TEXT_DIM,
        "Personalized tutoring with adaptive learning styles and real-world context.",
    );
    ui.add_space(10.0);

    let mut requested_mode = None;

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];

            ui.horizontal(|ui| {
                ui.colored_label(theme::TEXT_DIM, "SUBJECT & TOPIC");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toolbar::undo_redo_toolbar(ui, &mut state.education.topic);
                });
            });
            let mut topic = state.education.topic.value().clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut topic)
                    .desired_width(f32::INFINITY)
                    .hint_text("e.g. Quantum Entanglement"),
            );
            if response.changed() {
                state.education.topic.set(topic, now);
            }
            ui.add_space(8.0);

            ui.colored_label(theme::TEXT_DIM, "COMPLEXITY LEVEL");
            for pair in Level::ALL.chunks(2) {
                ui.horizontal(|ui| {
                    for &level in pair {
                        let text = format!("{} {}", level.icon(), level.label());
                        if ui
                            .selectable_label(state.education.level == level, text)
                            .on_hover_text(level.blurb())
                            .clicked()
                        {
                            state.education.level = level;
                        }
                    }
                });
            }
            ui.add_space(8.0);

            ui.colored_label(theme::TEXT_DIM, "TEACHING STYLE");
            for style in TeachingStyle::ALL {
                if ui
                    .selectable_label(state.education.style == style, style.label())
                    .clicked()
                {
                    state.education.style = style;
                }
            }
            ui.add_space(8.0);

            let loading = state.education.job.loading;
            let can_submit = !loading && !state.education.topic.value().trim().is_empty();
            let label = if loading && state.education.active_mode == TutorMode::Explain {
                "Teaching..."
            } else {
                "Start Learning"
            };
            if ui
                .add_enabled(can_submit, egui::Button::new(label))
                .clicked()
            {
                requested_mode = Some(TutorMode::Explain);
            }
        }

        {
            let ui = &mut cols[1];
            if state.education.job.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new());
                    let message = match state.education.active_mode {
                        TutorMode::Quiz => "Generating Quiz...",
                        TutorMode::Analogy => "Creating Analogy...",
                        _ => "Writing Lesson...",
                    };
                    ui.colored_label(theme::TEXT_DIM, message);
                });
            } else if let Some(error) = &state.education.job.error {
                ui.colored_label(theme::ERROR, error);
            } else if state.education.explanation.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("Ready to Learn?").strong());
                    ui.colored_label(
                        theme::TEXT_DIM,
                        "Select a topic, difficulty, and teaching style to generate a \
                         personalized lesson.",
                    );
                });
            } else {
                ui.label(RichText::new(state.education.active_mode.label()).strong().size(16.0));
                ui.colored_label(
                    theme::TEXT_DIM,
                    format!(
                        "{} • {} • {}",
                        state.education.topic.value(),
                        state.education.level.label(),
                        state.education.style.label()
                    ),
                );
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(ui.available_height() - 40.0)
                    .show(ui, |ui| {
                        markdown::markdown_view(ui, &state.education.explanation);
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.colored_label(theme::TEXT_DIM, "DIVE DEEPER:");
                    let enabled = !state.education.job.loading;
                    if ui
                        .add_enabled(enabled, egui::Button::new("Quiz Me").small())
                        .clicked()
                    {
                        requested_mode = Some(TutorMode::Quiz);
                    }
                    if ui
                        .add_enabled(enabled, egui::Button::new("Give Analogy").small())
                        .clicked()
                    {
                        requested_mode = Some(TutorMode::Analogy);
                    }
                    if ui
                        .add_enabled(enabled, egui::Button::new("Real World Use").small())
                        .clicked()
                    {
                        requested_mode = Some(TutorMode::Application);
                    }
                });
            }
        }
    });

    if let Some(mode) = requested_mode {
        if !state.education.topic.value().trim().is_empty() {
            state.education.active_mode = mode;
            request = Some(GenerateRequest::Tutor {
                topic: state.education.topic.value().clone(),
                level: state.education.level,
                style: state.education.style,
                mode,
            });
        }
    }

    request
}

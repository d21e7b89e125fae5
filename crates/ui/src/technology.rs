use std::time::Instant;

use egui::RichText;

use horizon_backend::docgen::DocModel;
use horizon_state::domain::Domain;
use horizon_state::request::GenerateRequest;
use horizon_state::session::AppState;
use horizon_state::technology::{EditorTheme, GENERATION_STEPS, SNIPPETS};

use crate::{markdown, theme, toolbar};

pub fn technology_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
) -> Option<GenerateRequest> {
    let mut request = None;
    let accent = theme::domain_accent(Domain::Technology);

    ui.label(RichText::new("Auto-Documentation").color(accent).strong().size(24.0));
    ui.colored_label(
        theme::TEXT_DIM,
        "Instantly generate comprehensive Markdown documentation from source code.",
    );
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];

            ui.horizontal(|ui| {
                ui.colored_label(theme::TEXT_DIM, RichText::new("SOURCE CODE").monospace());

                let previous_model = state.technology.model;
                egui::ComboBox::from_id_salt("doc_model")
                    .selected_text(state.technology.model.label())
                    .show_ui(ui, |ui| {
                        for model in DocModel::ALL {
                            ui.selectable_value(&mut state.technology.model, model, model.label());
                        }
                    });
                if state.technology.model != previous_model {
                    state.technology.model_notice =
                        Some((format!("{} Active", state.technology.model.label()), now));
                }

                egui::ComboBox::from_id_salt("snippet_loader")
                    .selected_text("Load Example...")
                    .show_ui(ui, |ui| {
                        for snippet in &SNIPPETS {
                            if ui.selectable_label(false, snippet.label).clicked() {
                                state.technology.code.set(snippet.code.to_string(), now);
                            }
                        }
                    });

                let theme_icon = match state.technology.editor_theme {
                    EditorTheme::Dark => "☀",
                    EditorTheme::Light => "🌙",
                };
                if ui
                    .button(theme_icon)
                    .on_hover_text("Toggle editor theme")
                    .clicked()
                {
                    state.technology.editor_theme = state.technology.editor_theme.toggled();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toolbar::undo_redo_toolbar(ui, &mut state.technology.code);
                });
            });

            if let Some(notice) = state.technology.model_notice_visible(now) {
                ui.colored_label(accent, notice);
            }

            let editor_fill = match state.technology.editor_theme {
                EditorTheme::Dark => theme::BG_DARK,
                EditorTheme::Light => egui::Color32::from_rgb(241, 245, 249),
            };
            let mut code = state.technology.code.value().clone();
            let response = egui::Frame::new()
                .fill(editor_fill)
                .corner_radius(theme::ROUNDING)
                .inner_margin(egui::Margin::same(4))
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut code)
                            .code_editor()
                            .desired_rows(16)
                            .desired_width(f32::INFINITY)
                            .hint_text("// Paste your class, function, or component code here..."),
                    )
                })
                .inner;
            if response.changed() {
                state.technology.code.set(code, now);
            }

            ui.add_space(6.0);
            let can_submit =
                !state.technology.job.loading && !state.technology.code.value().trim().is_empty();
            let label = if state.technology.job.loading {
                "Generating..."
            } else {
                "Generate Docs →"
            };
            if ui
                .add_enabled(can_submit, egui::Button::new(label))
                .clicked()
            {
                request = Some(GenerateRequest::GenerateDocs {
                    code: state.technology.code.value().clone(),
                    model: state.technology.model,
                });
            }
        }

        {
            let ui = &mut cols[1];
            ui.colored_label(theme::TEXT_DIM, RichText::new("MARKDOWN PREVIEW").monospace());
            ui.separator();

            if state.technology.job.loading {
                let current = state.technology.current_step(now);
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(accent, RichText::new("PROCESSING CODE").strong());
                });
                ui.add_space(6.0);
                for (index, step) in GENERATION_STEPS.iter().enumerate() {
                    ui.horizontal(|ui| {
                        if index < current {
                            ui.colored_label(theme::SUCCESS, "✔");
                            ui.label(*step);
                        } else if index == current {
                            ui.add(egui::Spinner::new().size(14.0));
                            ui.label(RichText::new(*step).strong());
                        } else {
                            ui.colored_label(theme::TEXT_DIM, "◌");
                            ui.colored_label(theme::TEXT_DIM, *step);
                        }
                    });
                }
            } else if let Some(error) = &state.technology.job.error {
                ui.colored_label(theme::ERROR, error);
            } else if state.technology.docs.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.colored_label(theme::TEXT_DIM, "Documentation will render here");
                });
            } else {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        markdown::markdown_view(ui, &state.technology.docs);
                    });
            }
        }
    });

    request
}

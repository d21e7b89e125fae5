use std::time::Instant;

use egui::RichText;

use horizon_state::domain::Domain;
use horizon_state::request::GenerateRequest;
use horizon_state::science::EntryType;
use horizon_state::session::AppState;

use crate::{markdown, theme, toolbar};

pub fn science_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
) -> Option<GenerateRequest> {
    let mut request = None;
    let accent = theme::domain_accent(Domain::Science);

    ui.label(RichText::new("Scientific Knowledge Base").color(accent).strong().size(24.0));
    ui.colored_label(
        theme::TEXT_DIM,
        "Organize literature, track experiments, and hypothesize with AI assistance.",
    );
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];
            ui.label("Entry Type");
            ui.horizontal(|ui| {
                for entry_type in EntryType::ALL {
                    if ui
                        .selectable_label(state.science.entry_type == entry_type, entry_type.label())
                        .clicked()
                    {
                        state.science.entry_type = entry_type;
                    }
                }
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Raw Notes / Abstract / Data");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    toolbar::undo_redo_toolbar(ui, &mut state.science.notes);
                });
            });

            let mut notes = state.science.notes.value().clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut notes)
                    .desired_rows(14)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace)
                    .hint_text(
                        "Paste your raw notes here. For example: \"Experiment 42b results: \
                         temp increased by 10%... observed reaction...\"",
                    ),
            );
            if response.changed() {
                state.science.notes.set(notes, now);
            }

            ui.add_space(6.0);
            let can_submit =
                !state.science.job.loading && !state.science.notes.value().trim().is_empty();
            if ui
                .add_enabled(can_submit, egui::Button::new("Generate Entry"))
                .clicked()
            {
                request = Some(GenerateRequest::OrganizeResearch {
                    notes: state.science.notes.value().clone(),
                    entry_type: state.science.entry_type,
                });
            }
        }

        {
            let ui = &mut cols[1];
            if state.science.job.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new());
                    ui.colored_label(theme::TEXT_DIM, "Generating entry...");
                });
            } else if let Some(error) = &state.science.job.error {
                ui.colored_label(theme::ERROR, error);
            } else if let Some(entry) = &state.science.entry {
                ui.horizontal_wrapped(|ui| {
                    ui.colored_label(accent, RichText::new(entry.category.to_uppercase()).strong());
                    for tag in &entry.tags {
                        ui.colored_label(theme::TEXT_DIM, format!("#{tag}"));
                    }
                });
                ui.label(RichText::new(&entry.title).strong().size(20.0));
                if !entry.summary.is_empty() {
                    ui.colored_label(theme::TEXT_DIM, RichText::new(&entry.summary).italics());
                }
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        markdown::markdown_view(ui, &entry.content);
                    });
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.colored_label(
                        theme::TEXT_DIM,
                        "Enter data to generate a structured knowledge base entry",
                    );
                });
            }
        }
    });

    request
}

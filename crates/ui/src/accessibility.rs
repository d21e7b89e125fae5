use std::path::PathBuf;
use std::time::Instant;

use egui::RichText;

use horizon_state::accessibility::AccessibilityTab;
use horizon_state::domain::Domain;
use horizon_state::request::GenerateRequest;
use horizon_state::session::AppState;

use crate::{markdown, theme, toolbar};

pub enum AccessibilityAction {
    None,
    ImagePicked(PathBuf),
    RemoveImage,
    Request(GenerateRequest),
}

pub fn accessibility_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
) -> AccessibilityAction {
    let mut action = AccessibilityAction::None;
    let accent = theme::domain_accent(Domain::Accessibility);

    ui.label(RichText::new("Accessibility").color(accent).strong().size(24.0));
    ui.colored_label(
        theme::TEXT_DIM,
        "Build tools that work for everyone using Vision and Speech.",
    );
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        for tab in [AccessibilityTab::Vision, AccessibilityTab::Speech] {
            if ui
                .selectable_label(state.accessibility.tab == tab, tab.label())
                .clicked()
            {
                state.accessibility.tab = tab;
            }
        }
    });
    ui.separator();

    match state.accessibility.tab {
        AccessibilityTab::Vision => vision_tab(ui, state, &mut action),
        AccessibilityTab::Speech => speech_tab(ui, state, now, &mut action),
    }

    action
}

fn vision_tab(ui: &mut egui::Ui, state: &mut AppState, action: &mut AccessibilityAction) {
    match &state.accessibility.image {
        None => {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Upload an Image").strong());
                ui.colored_label(
                    theme::TEXT_DIM,
                    "Select an image for AI analysis. Supports JPG, PNG, WebP.",
                );
                ui.add_space(6.0);
                if ui.button("Choose File...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                        .pick_file()
                    {
                        *action = AccessibilityAction::ImagePicked(path);
                    }
                }
            });
        }
        Some(image) => {
            ui.add(
                egui::Image::new(&image.texture)
                    .max_height(320.0)
                    .corner_radius(theme::ROUNDING),
            );
            ui.horizontal(|ui| {
                if ui.button("Remove Image").clicked() {
                    *action = AccessibilityAction::RemoveImage;
                }

                let loading = state.accessibility.vision.loading;
                let label = if state.accessibility.description.is_empty() {
                    "Analyze Image"
                } else {
                    "Regenerate"
                };
                if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                    *action = AccessibilityAction::Request(GenerateRequest::DescribeImage {
                        image: image.bytes.clone(),
                        mime_type: image.mime_type.clone(),
                    });
                }
            });
        }
    }

    if let Some(error) = &state.accessibility.vision.error {
        ui.add_space(6.0);
        ui.colored_label(theme::ERROR, error);
    }

    if state.accessibility.vision.loading {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.colored_label(theme::TEXT_DIM, "Analyzing image...");
        });
    }

    if !state.accessibility.description.is_empty() {
        ui.add_space(10.0);
        ui.colored_label(
            theme::domain_accent(Domain::Accessibility),
            RichText::new("ANALYSIS RESULT").strong(),
        );
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                markdown::markdown_view(ui, &state.accessibility.description);
            });
    }
}

fn speech_tab(
    ui: &mut egui::Ui,
    state: &mut AppState,
    now: Instant,
    action: &mut AccessibilityAction,
) {
    ui.horizontal(|ui| {
        ui.label("Text to Speak");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            toolbar::undo_redo_toolbar(ui, &mut state.accessibility.tts_text);
        });
    });

    let mut text = state.accessibility.tts_text.value().clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .desired_rows(8)
            .desired_width(f32::INFINITY)
            .hint_text("Enter text here to generate lifelike speech..."),
    );
    if response.changed() {
        state.accessibility.tts_text.set(text, now);
    }

    ui.add_space(6.0);
    let loading = state.accessibility.speech.loading;
    let can_submit = !loading && !state.accessibility.tts_text.value().trim().is_empty();
    if ui
        .add_enabled(can_submit, egui::Button::new("Generate Speech"))
        .clicked()
    {
        *action = AccessibilityAction::Request(GenerateRequest::SynthesizeSpeech {
            text: state.accessibility.tts_text.value().clone(),
        });
    }

    if loading {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.colored_label(theme::TEXT_DIM, "Synthesizing speech...");
        });
    }

    if let Some(error) = &state.accessibility.speech.error {
        ui.colored_label(theme::ERROR, error);
    }
}

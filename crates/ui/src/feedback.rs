use std::time::Instant;

use egui::RichText;

use horizon_state::feedback::{FeedbackKind, FeedbackState, FeedbackStatus};

use crate::theme;

pub fn feedback_modal(ctx: &egui::Context, feedback: &mut FeedbackState, now: Instant) {
    if !feedback.open {
        return;
    }

    let mut open = true;
    egui::Window::new("Share Feedback")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(380.0)
        .show(ctx, |ui| {
            if matches!(feedback.status, FeedbackStatus::Success { .. }) {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.colored_label(theme::SUCCESS, RichText::new("Thank you!").strong().size(16.0));
                    ui.colored_label(theme::TEXT_DIM, "Your feedback has been received.");
                    ui.add_space(12.0);
                });
                return;
            }

            ui.colored_label(theme::TEXT_DIM, "Help us improve Horizon.");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                for kind in [FeedbackKind::Suggestion, FeedbackKind::Issue] {
                    if ui
                        .selectable_label(feedback.kind == kind, kind.label())
                        .clicked()
                    {
                        feedback.kind = kind;
                    }
                }
            });

            let hint = feedback.kind.placeholder();
            ui.add(
                egui::TextEdit::multiline(&mut feedback.text)
                    .desired_rows(5)
                    .desired_width(f32::INFINITY)
                    .hint_text(hint),
            );

            let submitting = matches!(feedback.status, FeedbackStatus::Submitting { .. });
            let can_submit = !submitting && !feedback.text.trim().is_empty();
            let label = if submitting {
                "Sending..."
            } else {
                "Submit Feedback"
            };
            if ui
                .add_enabled(can_submit, egui::Button::new(label))
                .clicked()
            {
                feedback.submit(now);
            }
        });

    if !open {
        feedback.close();
    }
}

use horizon_state::history::TextHistory;

/// Undo/redo buttons for one text field, greyed out when the respective
/// direction is unavailable.
pub fn undo_redo_toolbar(ui: &mut egui::Ui, history: &mut TextHistory) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(history.can_undo(), egui::Button::new("⟲").small())
            .on_hover_text("Undo")
            .clicked()
        {
            history.undo();
        }
        if ui
            .add_enabled(history.can_redo(), egui::Button::new("⟳").small())
            .on_hover_text("Redo")
            .clicked()
        {
            history.redo();
        }
    });
}

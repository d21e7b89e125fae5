use horizon_state::session::AppState;

/// Cmd/Ctrl+Z and Shift+Cmd/Ctrl+Z act on the active panel's text field.
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    let (undo, redo) = ctx.input(|i| {
        let z = i.key_pressed(egui::Key::Z);
        (
            z && i.modifiers.command && !i.modifiers.shift,
            z && i.modifiers.command && i.modifiers.shift,
        )
    });
    if !undo && !redo {
        return;
    }

    let Some(history) = state.active_history_mut() else {
        return;
    };
    if undo {
        history.undo();
    }
    if redo {
        history.redo();
    }
}

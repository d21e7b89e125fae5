use egui::RichText;

use horizon_state::domain::Domain;

use crate::theme;

pub enum SidebarAction {
    None,
    Select(Domain),
    OpenFeedback,
}

pub fn sidebar_panel(ui: &mut egui::Ui, active: Domain) -> SidebarAction {
    let mut action = SidebarAction::None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("Horizon").strong().size(18.0))
            .on_hover_text("Back to home")
            .clicked()
        {
            action = SidebarAction::Select(Domain::Home);
        }
    });
    ui.separator();

    for domain in Domain::ALL {
        let selected = active == domain;
        let color = if selected {
            theme::domain_accent(domain)
        } else {
            theme::TEXT_DIM
        };
        let response = ui.selectable_label(selected, RichText::new(domain.label()).color(color));
        if response.clicked() {
            action = SidebarAction::Select(domain);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(8.0);
        ui.colored_label(
            theme::TEXT_DIM,
            "Powered by Google Gemini Models\n2.5 Flash, 3 Pro Preview",
        );
        ui.add_space(4.0);
        if ui.button("Feedback").clicked() {
            action = SidebarAction::OpenFeedback;
        }
    });

    action
}

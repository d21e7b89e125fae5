use egui::RichText;

use horizon_state::domain::Domain;

use crate::theme;

const FEATURES: [Domain; 6] = [
    Domain::Science,
    Domain::Education,
    Domain::Accessibility,
    Domain::Health,
    Domain::Business,
    Domain::Technology,
];

fn blurb(domain: Domain) -> &'static str {
    match domain {
        Domain::Science => "Accelerate discovery and research",
        Domain::Education => "Reimagine learning with personalized, adaptive explanations",
        Domain::Accessibility => "Build tools that work for everyone",
        Domain::Health => "Improve lives and patient care",
        Domain::Business => "Reinvent workflows and goals",
        Domain::Technology => "Push the boundaries of code",
        Domain::Home => "",
    }
}

pub fn home_panel(ui: &mut egui::Ui) -> Option<Domain> {
    let mut navigate = None;

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.colored_label(theme::TEXT_DIM, "THE AI-POWERED HORIZON");
        ui.label(RichText::new("Horizon").strong().size(40.0));
        ui.add_space(4.0);
        ui.colored_label(
            theme::TEXT_DIM,
            "Accelerating discovery, reimagining learning, and building a more accessible world.",
        );
        ui.add_space(24.0);
    });

    let columns = 3;
    for row in FEATURES.chunks(columns) {
        ui.columns(columns, |cols| {
            for (i, &domain) in row.iter().enumerate() {
                let ui = &mut cols[i];
                egui::Frame::new()
                    .fill(theme::BG_CARD)
                    .corner_radius(theme::ROUNDING)
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(domain.label())
                                .color(theme::domain_accent(domain))
                                .strong()
                                .size(17.0),
                        );
                        ui.colored_label(theme::TEXT_DIM, blurb(domain));
                        ui.add_space(6.0);
                        if ui.button("Open →").clicked() {
                            navigate = Some(domain);
                        }
                    });
            }
        });
        ui.add_space(8.0);
    }

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.colored_label(
            theme::TEXT_DIM,
            "Powered by Google Gemini 2.5 Flash & 3 Pro Preview",
        );
    });

    navigate
}

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

use horizon_state::domain::Domain;

pub const BG_DARK: Color32 = Color32::from_rgb(15, 23, 42);
pub const BG_PANEL: Color32 = Color32::from_rgb(20, 29, 47);
pub const BG_SURFACE: Color32 = Color32::from_rgb(30, 41, 59);
pub const BG_CARD: Color32 = Color32::from_rgb(24, 33, 53);
pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 232, 240);
pub const TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);

pub const ROUNDING: CornerRadius = CornerRadius::same(4);

pub fn domain_accent(domain: Domain) -> Color32 {
    match domain {
        Domain::Home => Color32::WHITE,
        Domain::Science => Color32::from_rgb(52, 211, 153),
        Domain::Education => Color32::from_rgb(251, 191, 36),
        Domain::Accessibility => Color32::from_rgb(251, 113, 133),
        Domain::Health => Color32::from_rgb(248, 113, 113),
        Domain::Business => Color32::from_rgb(129, 140, 248),
        Domain::Technology => Color32::from_rgb(34, 211, 238),
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_DARK;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_SURFACE;

    visuals.widgets.noninteractive.bg_fill = BG_SURFACE;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.inactive.bg_fill = BG_SURFACE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 56, 86);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.visuals = visuals;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);

    ctx.set_style(style);
}

//! Minimal markdown renderer for generated output. A pure transformation
//! from text to widgets; covers the structures the backend actually emits
//! (headings, lists, fenced code, bold and inline code).

use egui::RichText;

use crate::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(u8, String),
    Paragraph(String),
    Bullet(String),
    Numbered(u32, String),
    Code(String),
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(String),
    Code(String),
}

pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut code: Option<String> = None;

    for line in text.lines() {
        let stripped = line.trim_start();

        if stripped.starts_with("```") {
            match code.take() {
                Some(buf) => blocks.push(Block::Code(buf)),
                None => code = Some(String::new()),
            }
            continue;
        }
        if let Some(buf) = code.as_mut() {
            if !buf.is_empty() {
                buf.push('\n');
            }
            buf.push_str(line);
            continue;
        }

        if stripped.is_empty() {
            continue;
        }

        let hashes = stripped.bytes().take_while(|b| *b == b'#').count();
        if (1..=6).contains(&hashes) && stripped[hashes..].starts_with(' ') {
            let level = hashes.min(3) as u8;
            blocks.push(Block::Heading(level, stripped[hashes + 1..].trim().to_string()));
            continue;
        }

        if stripped.len() >= 3 && stripped.bytes().all(|b| b == b'-') {
            blocks.push(Block::Rule);
            continue;
        }

        if let Some(rest) = stripped.strip_prefix("- ").or_else(|| stripped.strip_prefix("* ")) {
            blocks.push(Block::Bullet(rest.trim().to_string()));
            continue;
        }

        if let Some((digits, rest)) = stripped.split_once(". ") {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(n) = digits.parse() {
                    blocks.push(Block::Numbered(n, rest.trim().to_string()));
                    continue;
                }
            }
        }

        blocks.push(Block::Paragraph(stripped.to_string()));
    }

    // Unterminated fence: keep what we have rather than dropping it.
    if let Some(buf) = code {
        blocks.push(Block::Code(buf));
    }

    blocks
}

pub fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let bold = rest.find("**");
        let code = rest.find('`');
        let marker = match (bold, code) {
            (Some(b), Some(c)) if b < c => Marker::Bold(b),
            (_, Some(c)) => Marker::Code(c),
            (Some(b), None) => Marker::Bold(b),
            (None, None) => {
                push_text(&mut spans, rest);
                break;
            }
        };

        match marker {
            Marker::Bold(at) => {
                if let Some(end) = rest[at + 2..].find("**") {
                    push_text(&mut spans, &rest[..at]);
                    spans.push(Span::Strong(rest[at + 2..at + 2 + end].to_string()));
                    rest = &rest[at + 2 + end + 2..];
                } else {
                    // No closing marker: everything is literal text.
                    push_text(&mut spans, rest);
                    break;
                }
            }
            Marker::Code(at) => {
                if let Some(end) = rest[at + 1..].find('`') {
                    push_text(&mut spans, &rest[..at]);
                    spans.push(Span::Code(rest[at + 1..at + 1 + end].to_string()));
                    rest = &rest[at + 1 + end + 1..];
                } else {
                    push_text(&mut spans, rest);
                    break;
                }
            }
        }
    }

    spans
}

enum Marker {
    Bold(usize),
    Code(usize),
}

fn push_text(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::Text(text.to_string()));
    }
}

pub fn markdown_view(ui: &mut egui::Ui, text: &str) {
    for block in parse_blocks(text) {
        match block {
            Block::Heading(level, text) => {
                ui.add_space(6.0);
                let size = match level {
                    1 => 20.0,
                    2 => 17.0,
                    _ => 15.0,
                };
                ui.label(RichText::new(text).strong().size(size));
                ui.add_space(2.0);
            }
            Block::Paragraph(text) => render_line(ui, &text, None),
            Block::Bullet(text) => render_line(ui, &text, Some("•  ".to_string())),
            Block::Numbered(n, text) => render_line(ui, &text, Some(format!("{n}.  "))),
            Block::Code(code) => {
                egui::Frame::new()
                    .fill(theme::BG_DARK)
                    .corner_radius(theme::ROUNDING)
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.label(RichText::new(code).monospace());
                    });
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}

fn render_line(ui: &mut egui::Ui, line: &str, prefix: Option<String>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        if let Some(prefix) = prefix {
            ui.label(RichText::new(prefix).color(theme::TEXT_DIM));
        }
        for span in parse_spans(line) {
            match span {
                Span::Text(text) => {
                    ui.label(text);
                }
                Span::Strong(text) => {
                    ui.label(RichText::new(text).strong());
                }
                Span::Code(text) => {
                    ui.label(
                        RichText::new(text)
                            .monospace()
                            .background_color(theme::BG_SURFACE),
                    );
                }
            }
        }
    });
}

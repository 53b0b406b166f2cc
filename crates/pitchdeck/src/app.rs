use anyhow::Context as _;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::animation::{
    EntranceAnimator, HoverProfile, InlineStyle, NoAnimation, Shadow, StaggeredEntrance,
    Transition,
};
use crate::chrome::{ChromeOptions, PresentationChrome};
use crate::config::Config;
use crate::input::{ElementRole, InputEvent, Key, KeyPress, Modifiers};
use crate::page::{ElementContent, ElementRef, SlideElement};
use crate::parser::{self, ItemClass};
use crate::platform::{Host, PlatformError};
use crate::theme::Theme;

const MAX_CARD_COLUMNS: usize = 3;

/// Host backed by the running egui frame. Side effects are buffered and
/// applied once the chrome has finished handling the frame's events.
struct FrameHost {
    /// `None` when the viewport cannot report or change its fullscreen state.
    fullscreen: Option<bool>,
    messages: Vec<String>,
    clipboard: Option<String>,
    viewport_cmds: Vec<egui::ViewportCommand>,
}

impl FrameHost {
    fn new(fullscreen: Option<bool>) -> Self {
        Self {
            fullscreen,
            messages: Vec::new(),
            clipboard: None,
            viewport_cmds: Vec::new(),
        }
    }
}

impl Host for FrameHost {
    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn toggle_fullscreen(&mut self) -> Result<(), PlatformError> {
        let current = self
            .fullscreen
            .ok_or(PlatformError::Unsupported("fullscreen"))?;
        self.fullscreen = Some(!current);
        self.viewport_cmds
            .push(egui::ViewportCommand::Fullscreen(!current));
        Ok(())
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), PlatformError> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

/// The numeric part of an [`InlineStyle`] the painter interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Visual {
    opacity: f32,
    translate_y: f32,
    scale: f32,
    shadow: f32,
}

impl Visual {
    fn of(style: &InlineStyle) -> Self {
        Self {
            opacity: style.opacity,
            translate_y: style.translate_y,
            scale: style.scale,
            shadow: match style.shadow {
                Shadow::None => 0.0,
                Shadow::Small => 2.0,
                Shadow::Medium => 6.0,
                Shadow::Large => 12.0,
            },
        }
    }

    fn lerp(self, to: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity),
            translate_y: mix(self.translate_y, to.translate_y),
            scale: mix(self.scale, to.scale),
            shadow: mix(self.shadow, to.shadow),
        }
    }
}

struct Tween {
    from: Visual,
    to: Visual,
    start: Instant,
    transition: Option<Transition>,
}

impl Tween {
    fn progress(&self, now: Instant) -> f32 {
        match self.transition {
            Some(t) if t.duration > 0.0 => {
                (now.duration_since(self.start).as_secs_f32() / t.duration).min(1.0)
            }
            _ => 1.0,
        }
    }

    fn value(&self, now: Instant) -> Visual {
        match self.transition {
            Some(t) => self.from.lerp(self.to, t.easing.apply(self.progress(now))),
            None => self.to,
        }
    }
}

struct PitchDeckApp {
    chrome: PresentationChrome,
    theme: Theme,
    title: String,
    dialog: Option<String>,
    hovered: Option<ElementRef>,
    tweens: HashMap<ElementRef, Tween>,
    announced: String,
}

impl PitchDeckApp {
    fn new(chrome: PresentationChrome, theme: Theme, title: String) -> Self {
        Self {
            chrome,
            theme,
            title,
            dialog: None,
            hovered: None,
            tweens: HashMap::new(),
            announced: String::new(),
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    /// Current interpolated visual of an element. Starts a new tween whenever
    /// the chrome changed the element's target style.
    fn visual(&mut self, at: ElementRef, style: &InlineStyle, now: Instant) -> (Visual, bool) {
        let target = Visual::of(style);
        let tween = self.tweens.entry(at).or_insert(Tween {
            from: target,
            to: target,
            start: now,
            transition: None,
        });
        if tween.to != target {
            let current = tween.value(now);
            *tween = Tween {
                from: current,
                to: target,
                start: now,
                transition: style.transition,
            };
        }
        let animating = tween.transition.is_some() && tween.progress(now) < 1.0;
        (tween.value(now), animating)
    }

    fn collect_input(&self, ctx: &egui::Context, events: &mut Vec<InputEvent>) -> bool {
        let dialog_open = self.dialog.is_some();
        let mut close_dialog = false;
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => {
                        if dialog_open {
                            if matches!(key, egui::Key::Enter | egui::Key::Escape) {
                                close_dialog = true;
                            }
                            continue;
                        }
                        match key {
                            egui::Key::Q if modifiers.is_none() => {
                                viewport_cmds.push(egui::ViewportCommand::Close);
                            }
                            egui::Key::Escape if i.viewport().fullscreen.unwrap_or(false) => {
                                viewport_cmds.push(egui::ViewportCommand::Fullscreen(false));
                            }
                            _ => events.push(InputEvent::Key(KeyPress {
                                key: map_key(*key),
                                modifiers: Modifiers {
                                    ctrl: modifiers.ctrl,
                                    command: modifiers.mac_cmd,
                                },
                            })),
                        }
                    }
                    egui::Event::PointerButton {
                        pos,
                        button: egui::PointerButton::Primary,
                        pressed,
                        ..
                    } if !dialog_open => {
                        events.push(if *pressed {
                            InputEvent::PointerDown { x: pos.x, y: pos.y }
                        } else {
                            InputEvent::PointerUp { x: pos.x, y: pos.y }
                        });
                    }
                    egui::Event::PointerGone => events.push(InputEvent::PointerCancel),
                    _ => {}
                }
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        close_dialog
    }

    /// Paint the active slide. Returns `true` while any element is mid-tween.
    fn draw_slide(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        scale: f32,
        now: Instant,
        events: &mut Vec<InputEvent>,
        hovered: &mut Option<ElementRef>,
    ) -> bool {
        let Some(slide) = self.chrome.page().active_slide() else {
            return false;
        };
        let elements = self.chrome.page().slides[slide].elements.clone();
        let painter = ui.painter();
        let content = egui::Rect::from_min_max(
            egui::pos2(rect.left() + 140.0 * scale, rect.top() + 100.0 * scale),
            egui::pos2(rect.right() - 140.0 * scale, rect.bottom() - 140.0 * scale),
        );
        let width = content.width();
        let mut y = content.top();
        let mut animating = false;

        let mut i = 0;
        while i < elements.len() {
            match &elements[i].content {
                ElementContent::Heading { level, text } => {
                    let (size, color) = if *level == 1 {
                        (self.theme.h1_size, self.theme.heading_color)
                    } else {
                        (self.theme.heading_size(*level), self.theme.accent)
                    };
                    let galley = painter.layout(
                        text.clone(),
                        egui::FontId::proportional(size * scale),
                        color,
                        width,
                    );
                    let height = galley.size().y;
                    painter.galley(egui::pos2(content.left(), y), galley, color);
                    y += height + 28.0 * scale;
                    i += 1;
                }
                ElementContent::Paragraph(text) => {
                    let galley = painter.layout(
                        text.clone(),
                        egui::FontId::proportional(self.theme.body_size * scale),
                        self.theme.foreground,
                        width,
                    );
                    let height = galley.size().y;
                    painter.galley(egui::pos2(content.left(), y), galley, self.theme.foreground);
                    y += height + 24.0 * scale;
                    i += 1;
                }
                ElementContent::Item { class, .. } => {
                    let plain = *class == ItemClass::Plain;
                    let end = run_end(&elements, i, |c| {
                        matches!(c, ElementContent::Item { class, .. } if (*class == ItemClass::Plain) == plain)
                    });
                    let (height, moving) = if plain {
                        self.draw_bullets(ui, &elements, slide, i..end, content.left(), y, width, scale, now)
                    } else {
                        self.draw_cards(ui, &elements, slide, i..end, content.left(), y, width, scale, now, hovered)
                    };
                    animating |= moving;
                    y += height + 32.0 * scale;
                    i = end;
                }
                ElementContent::Trigger { .. } => {
                    let end = run_end(&elements, i, |c| {
                        matches!(c, ElementContent::Trigger { .. })
                    });
                    let (height, moving) = self.draw_triggers(
                        ui,
                        &elements,
                        slide,
                        i..end,
                        egui::pos2(content.left(), y),
                        scale,
                        now,
                        events,
                        hovered,
                    );
                    animating |= moving;
                    y += height + 24.0 * scale;
                    i = end;
                }
            }
        }
        animating
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_bullets(
        &mut self,
        ui: &egui::Ui,
        elements: &[SlideElement],
        slide: usize,
        range: std::ops::Range<usize>,
        left: f32,
        top: f32,
        width: f32,
        scale: f32,
        now: Instant,
    ) -> (f32, bool) {
        let painter = ui.painter();
        let mut y = top;
        let mut animating = false;
        for index in range {
            let ElementContent::Item { text, .. } = &elements[index].content else {
                continue;
            };
            let at = ElementRef {
                slide,
                element: index,
            };
            let (v, moving) = self.visual(at, &elements[index].style, now);
            animating |= moving;
            let color = Theme::with_opacity(self.theme.foreground, v.opacity);
            let font = egui::FontId::proportional(self.theme.body_size * 0.85 * scale);
            let galley = painter.layout(text.clone(), font.clone(), color, width - 40.0 * scale);
            let offset = v.translate_y * scale;
            painter.text(
                egui::pos2(left, y + offset),
                egui::Align2::LEFT_TOP,
                "•",
                font,
                Theme::with_opacity(self.theme.accent, v.opacity),
            );
            let height = galley.size().y;
            painter.galley(egui::pos2(left + 40.0 * scale, y + offset), galley, color);
            y += height + 12.0 * scale;
        }
        (y - top, animating)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cards(
        &mut self,
        ui: &egui::Ui,
        elements: &[SlideElement],
        slide: usize,
        range: std::ops::Range<usize>,
        left: f32,
        top: f32,
        width: f32,
        scale: f32,
        now: Instant,
        hovered: &mut Option<ElementRef>,
    ) -> (f32, bool) {
        let painter = ui.painter();
        let gap = 28.0 * scale;
        let padding = 28.0 * scale;
        let radius = 12.0 * scale;
        let columns = range.len().clamp(1, MAX_CARD_COLUMNS);
        let card_w = (width - gap * (columns - 1) as f32) / columns as f32;
        let font = egui::FontId::proportional(self.theme.body_size * 0.75 * scale);

        let indices: Vec<usize> = range.collect();
        let mut y = top;
        let mut animating = false;

        for row in indices.chunks(columns) {
            let galleys: Vec<_> = row
                .iter()
                .map(|&index| match &elements[index].content {
                    ElementContent::Item { text, .. } => painter.layout(
                        text.clone(),
                        font.clone(),
                        self.theme.foreground,
                        card_w - padding * 2.0,
                    ),
                    _ => painter.layout_no_wrap(String::new(), font.clone(), self.theme.foreground),
                })
                .collect();
            let card_h = galleys
                .iter()
                .map(|g| g.size().y)
                .fold(0.0_f32, f32::max)
                + padding * 2.0;

            for (col, (&index, galley)) in row.iter().zip(galleys).enumerate() {
                let ElementContent::Item { class, text } = &elements[index].content else {
                    continue;
                };
                let at = ElementRef {
                    slide,
                    element: index,
                };
                let base = egui::Rect::from_min_size(
                    egui::pos2(left + col as f32 * (card_w + gap), y),
                    egui::vec2(card_w, card_h),
                );
                let (v, moving) = self.visual(at, &elements[index].style, now);
                animating |= moving;

                let card = egui::Rect::from_center_size(
                    base.center() + egui::vec2(0.0, v.translate_y * scale),
                    base.size() * v.scale,
                );
                if v.shadow > 0.0 {
                    painter.rect_filled(
                        card.translate(egui::vec2(0.0, v.shadow * 0.5 * scale))
                            .expand(v.shadow * 0.5 * scale),
                        radius,
                        Theme::with_opacity(self.theme.shadow, v.opacity),
                    );
                }
                painter.rect_filled(
                    card,
                    radius,
                    Theme::with_opacity(self.theme.card_background, v.opacity),
                );
                let border = match class {
                    ItemClass::PartnerBox | ItemClass::PartnerProfile => self.theme.accent,
                    _ => self.theme.card_border,
                };
                painter.rect_stroke(
                    card,
                    radius,
                    egui::Stroke::new(1.5 * scale, Theme::with_opacity(border, v.opacity)),
                    egui::StrokeKind::Inside,
                );
                if *class == ItemClass::SdgItem {
                    let stripe = egui::Rect::from_min_size(
                        card.left_top(),
                        egui::vec2(6.0 * scale, card.height()),
                    );
                    painter.rect_filled(
                        stripe,
                        radius,
                        Theme::with_opacity(self.theme.accent, v.opacity),
                    );
                }
                let text_color = Theme::with_opacity(self.theme.foreground, v.opacity);
                let galley = if v.opacity < 1.0 {
                    painter.layout(text.clone(), font.clone(), text_color, card_w - padding * 2.0)
                } else {
                    galley
                };
                painter.galley(
                    card.left_top() + egui::vec2(padding, padding),
                    galley,
                    text_color,
                );

                if HoverProfile::for_content(&elements[index].content).is_some() {
                    let id = ui.id().with(("element", slide, index));
                    if ui.interact(base, id, egui::Sense::hover()).hovered() {
                        *hovered = Some(at);
                    }
                }
            }
            y += card_h + gap;
        }
        ((y - gap - top).max(0.0), animating)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_triggers(
        &mut self,
        ui: &egui::Ui,
        elements: &[SlideElement],
        slide: usize,
        range: std::ops::Range<usize>,
        origin: egui::Pos2,
        scale: f32,
        now: Instant,
        events: &mut Vec<InputEvent>,
        hovered: &mut Option<ElementRef>,
    ) -> (f32, bool) {
        let painter = ui.painter();
        let padding = egui::vec2(32.0, 18.0) * scale;
        let font = egui::FontId::proportional(self.theme.body_size * 0.7 * scale);
        let mut x = origin.x;
        let mut height = 0.0_f32;
        let mut animating = false;

        for index in range {
            let ElementContent::Trigger { kind, label } = &elements[index].content else {
                continue;
            };
            let at = ElementRef {
                slide,
                element: index,
            };
            let (v, moving) = self.visual(at, &elements[index].style, now);
            animating |= moving;

            let galley = painter.layout_no_wrap(label.clone(), font.clone(), self.theme.background);
            let base = egui::Rect::from_min_size(
                egui::pos2(x, origin.y),
                galley.size() + padding * 2.0,
            );
            let pill = egui::Rect::from_center_size(
                base.center() + egui::vec2(0.0, v.translate_y * scale),
                base.size() * v.scale,
            );
            painter.rect_filled(
                pill,
                pill.height() / 2.0,
                Theme::with_opacity(self.theme.accent, v.opacity),
            );
            painter.galley(
                pill.center() - galley.size() / 2.0,
                galley,
                self.theme.background,
            );

            let id = ui.id().with(("trigger", slide, index));
            let response = ui.interact(base, id, egui::Sense::click());
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                if HoverProfile::for_content(&elements[index].content).is_some() {
                    *hovered = Some(at);
                }
            }
            if response.clicked() {
                events.push(InputEvent::Click(Some(ElementRole::Trigger(*kind))));
            }

            x = base.right() + 24.0 * scale;
            height = height.max(base.height());
        }
        (height, animating)
    }

    fn draw_chrome(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        scale: f32,
        events: &mut Vec<InputEvent>,
    ) {
        let page = self.chrome.page();
        let painter = ui.painter();
        let bar_y = rect.bottom() - 60.0 * scale;
        let font = egui::FontId::proportional(self.theme.chrome_size * scale);

        let buttons = [
            (
                page.prev_button.as_ref(),
                rect.left() + 70.0 * scale,
                "‹",
                ElementRole::PrevButton,
            ),
            (
                page.next_button.as_ref(),
                rect.right() - 70.0 * scale,
                "›",
                ElementRole::NextButton,
            ),
        ];
        for (button, x, glyph, role) in buttons {
            let Some(button) = button else { continue };
            let center = egui::pos2(x, bar_y);
            let hit = egui::Rect::from_center_size(center, egui::vec2(56.0, 56.0) * scale);
            let sense = if button.disabled {
                egui::Sense::hover()
            } else {
                egui::Sense::click()
            };
            let response = ui.interact(hit, ui.id().with(("nav", glyph)), sense);
            let opacity = if button.disabled {
                0.3
            } else if response.hovered() {
                1.0
            } else {
                0.7
            };
            let color = Theme::with_opacity(self.theme.accent, opacity);
            painter.circle_stroke(center, 26.0 * scale, egui::Stroke::new(2.0 * scale, color));
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(36.0 * scale),
                color,
            );
            if response.clicked() {
                events.push(InputEvent::Click(Some(role)));
            }
        }

        if let Some(indicators) = &page.indicators {
            let spacing = 28.0 * scale;
            let start_x = rect.center().x - spacing * (indicators.len().saturating_sub(1)) as f32 / 2.0;
            for (index, indicator) in indicators.iter().enumerate() {
                let center = egui::pos2(start_x + index as f32 * spacing, bar_y);
                let hit = egui::Rect::from_center_size(center, egui::vec2(spacing, spacing));
                let response =
                    ui.interact(hit, ui.id().with(("indicator", index)), egui::Sense::click());
                if indicator.active {
                    painter.circle_filled(center, 8.0 * scale, self.theme.accent);
                } else {
                    let color = if response.hovered() {
                        self.theme.accent
                    } else {
                        self.theme.card_border
                    };
                    painter.circle_filled(center, 6.0 * scale, color);
                }
                if response.clicked() {
                    events.push(InputEvent::Click(Some(ElementRole::Indicator(index))));
                }
                response.on_hover_text(indicator.label.as_str());
            }
        }

        if let (Some(current), Some(total)) = (&page.counter_current, &page.counter_total) {
            painter.text(
                egui::pos2(rect.right() - 130.0 * scale, bar_y),
                egui::Align2::RIGHT_CENTER,
                format!("{} / {}", current.text, total.text),
                font.clone(),
                Theme::with_opacity(self.theme.foreground, 0.6),
            );
        }

        if let Some(footer) = &self.chrome.meta().footer {
            painter.text(
                egui::pos2(rect.left() + 130.0 * scale, bar_y),
                egui::Align2::LEFT_CENTER,
                footer,
                font,
                Theme::with_opacity(self.theme.foreground, 0.5),
            );
        }
    }

    fn draw_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.dialog.clone() else {
            return;
        };
        let mut close = false;
        egui::Window::new(self.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(560.0);
                ui.label(egui::RichText::new(message).size(18.0));
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close {
            self.dialog = None;
        }
    }
}

impl eframe::App for PitchDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut events: Vec<InputEvent> = Vec::new();

        if self.collect_input(ctx, &mut events) {
            self.dialog = None;
        }

        let bg = self.theme.background;
        let mut hovered = None;
        let mut animating = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = Self::compute_scale(rect);

                animating = self.draw_slide(ui, rect, scale, now, &mut events, &mut hovered);
                self.draw_chrome(ui, rect, scale, &mut events);
            });

        if hovered != self.hovered {
            if let Some(left) = self.hovered {
                events.push(InputEvent::HoverLeave(left));
            }
            if let Some(entered) = hovered {
                events.push(InputEvent::HoverEnter(entered));
            }
            self.hovered = hovered;
        }

        // Slides stay inert behind an open dialog
        if self.dialog.is_some() {
            events.retain(|e| matches!(e, InputEvent::HoverEnter(_) | InputEvent::HoverLeave(_)));
        }

        let fullscreen = ctx.input(|i| i.viewport().fullscreen);
        let mut host = FrameHost::new(fullscreen);
        let had_events = !events.is_empty();
        for event in events {
            self.chrome.handle(event, &mut host, now);
        }

        for cmd in host.viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if let Some(text) = host.clipboard {
            ctx.copy_text(text);
        }
        if let Some(message) = host.messages.pop() {
            self.dialog = Some(message);
        }

        if let Some(region) = self.chrome.page().live_region() {
            if region.text != self.announced {
                debug!("{}", region.text);
                self.announced = region.text.clone();
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                    "{} · {}",
                    self.title, self.announced
                )));
            }
        }

        self.draw_dialog(ctx);

        if self.chrome.tick(now) || animating || had_events {
            ctx.request_repaint();
        }
    }
}

/// End of the run of elements starting at `start` whose content matches `same`.
fn run_end(elements: &[SlideElement], start: usize, same: impl Fn(&ElementContent) -> bool) -> usize {
    elements[start..]
        .iter()
        .position(|e| !same(&e.content))
        .map_or(elements.len(), |offset| start + offset)
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowUp => Key::ArrowUp,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::ArrowDown => Key::ArrowDown,
        egui::Key::Space => Key::Space,
        egui::Key::Home => Key::Home,
        egui::Key::End => Key::End,
        egui::Key::F => Key::Char('f'),
        egui::Key::P => Key::Char('p'),
        _ => Key::Other,
    }
}

pub fn run(file: PathBuf, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let deck = parser::parse(&content)?;
    if deck.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let config = Config::load_or_default();

    let title = deck.meta.title.clone().unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "pitchdeck".to_string())
    });

    let theme_name = deck
        .meta
        .theme
        .as_deref()
        .or(config.theme())
        .unwrap_or("light");
    let theme = Theme::from_name(theme_name);

    let options = ChromeOptions {
        swipe_threshold: config.swipe_threshold(),
        start_slide: start_slide.or(config.start_slide()),
    };

    let animator: Box<dyn EntranceAnimator> = if config.animations_enabled() {
        Box::new(StaggeredEntrance::new())
    } else {
        Box::new(NoAnimation)
    };

    info!(
        "Presenting {} ({} slides, theme {})",
        file.display(),
        deck.slides.len(),
        theme.name
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let window_title = title.clone();
    eframe::run_native(
        &window_title,
        native_options,
        Box::new(move |_cc| {
            let chrome = PresentationChrome::new(
                deck,
                Default::default(),
                animator,
                options,
                Instant::now(),
            );
            Ok(Box::new(PitchDeckApp::new(chrome, theme, title)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ENTRANCE_DURATION;
    use std::time::Duration;

    fn style(opacity: f32, transition: Option<Transition>) -> InlineStyle {
        InlineStyle {
            opacity,
            transition,
            ..InlineStyle::default()
        }
    }

    #[test]
    fn test_tween_without_transition_jumps() {
        let tween = Tween {
            from: Visual::of(&style(0.0, None)),
            to: Visual::of(&style(1.0, None)),
            start: Instant::now(),
            transition: None,
        };
        assert_eq!(tween.value(tween.start).opacity, 1.0);
    }

    #[test]
    fn test_tween_eases_toward_target() {
        let start = Instant::now();
        let tween = Tween {
            from: Visual::of(&style(0.0, None)),
            to: Visual::of(&style(1.0, None)),
            start,
            transition: Some(Transition::ease_out(ENTRANCE_DURATION)),
        };
        let mid = tween.value(start + Duration::from_millis(100)).opacity;
        assert!(mid > 0.0 && mid < 1.0);
        // Ease-out covers more than a linear share early on
        assert!(mid > 0.25);
        assert_eq!(tween.value(start + Duration::from_secs(1)).opacity, 1.0);
    }

    #[test]
    fn test_frame_host_buffers_side_effects() {
        let mut host = FrameHost::new(Some(false));
        host.toggle_fullscreen().unwrap();
        host.write_clipboard("pitch@upi").unwrap();
        host.show_message("hello");
        assert_eq!(host.fullscreen, Some(true));
        assert_eq!(host.clipboard.as_deref(), Some("pitch@upi"));
        assert_eq!(host.messages, vec!["hello".to_string()]);
        assert!(matches!(
            host.viewport_cmds.as_slice(),
            [egui::ViewportCommand::Fullscreen(true)]
        ));
    }

    #[test]
    fn test_frame_host_refuses_unknown_fullscreen() {
        let mut host = FrameHost::new(None);
        assert_eq!(
            host.toggle_fullscreen(),
            Err(PlatformError::Unsupported("fullscreen"))
        );
        assert!(host.viewport_cmds.is_empty());
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(egui::Key::Space), Key::Space);
        assert_eq!(map_key(egui::Key::F), Key::Char('f'));
        assert_eq!(map_key(egui::Key::Z), Key::Other);
    }

    #[test]
    fn test_run_end_groups_matching_content() {
        let deck = parser::parse(
            "# T\n\n@items: card\n- a\n- b\n\n@trigger: cta\n",
        )
        .unwrap();
        let page = crate::page::Page::from_deck(&deck, Default::default());
        let elements = &page.slides[0].elements;
        let first_item = elements
            .iter()
            .position(|e| matches!(e.content, ElementContent::Item { .. }))
            .unwrap();
        let end = run_end(elements, first_item, |c| {
            matches!(c, ElementContent::Item { .. })
        });
        assert_eq!(end - first_item, 2);
    }
}

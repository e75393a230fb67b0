//! FlashcardView: maps an adapter [`Screen`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::adapter::{DisplayInstruction, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ButtonLayout, Face, Rect};

pub const WINDOW_BG: Rgb = Rgb::new(0xB1, 0xDD, 0xC6);
pub const CARD_FRONT_BG: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const CARD_BACK_BG: Rgb = Rgb::new(0x91, 0xC2, 0xAF);

const DONT_KNOW_LABEL: &str = " ✘ don't know ";
const KNOW_LABEL: &str = " ✔ know ";
const FINISHED_TITLE: &str = "Well done!";
const FINISHED_TEXT: &str = "You have learned every word.";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Card area, buttons and notice line positions for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    pub buttons: ButtonLayout,
    pub notice_y: u16,
}

pub struct FlashcardView {
    max_card_w: u16,
    max_card_h: u16,
}

impl Default for FlashcardView {
    fn default() -> Self {
        Self {
            max_card_w: 60,
            max_card_h: 13,
        }
    }
}

impl FlashcardView {
    pub fn new(max_card_w: u16, max_card_h: u16) -> Self {
        Self {
            max_card_w,
            max_card_h,
        }
    }

    /// Smallest viewport that fits a card and both buttons.
    pub fn min_viewport(&self) -> Viewport {
        let buttons_w = label_width(DONT_KNOW_LABEL) + label_width(KNOW_LABEL) + 2;
        Viewport::new(buttons_w + 2, 5 + 4)
    }

    /// Place the card and buttons, or `None` if the viewport is too small.
    pub fn layout(&self, viewport: Viewport) -> Option<CardLayout> {
        let min = self.min_viewport();
        if viewport.width < min.width || viewport.height < min.height {
            return None;
        }

        // Card + gap + buttons + gap + notice.
        let card_w = viewport.width.saturating_sub(4).min(self.max_card_w).max(min.width - 2);
        let card_h = viewport.height.saturating_sub(4).min(self.max_card_h);
        let block_h = card_h + 4;

        let card_x = (viewport.width - card_w) / 2;
        let card_y = viewport.height.saturating_sub(block_h) / 2;
        let card = Rect::new(card_x, card_y, card_w, card_h);

        let buttons_y = card_y + card_h + 1;
        let know_w = label_width(KNOW_LABEL);
        let buttons = ButtonLayout {
            dont_know: Rect::new(card_x, buttons_y, label_width(DONT_KNOW_LABEL), 1),
            know: Rect::new(card_x + card_w - know_w, buttons_y, know_w, 1),
        };

        Some(CardLayout {
            card,
            buttons,
            notice_y: buttons_y + 2,
        })
    }

    /// Render into an existing framebuffer and return where the buttons went.
    ///
    /// The returned layout is empty when there is nothing to click.
    pub fn render_into(
        &self,
        screen: &Screen,
        notice: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> ButtonLayout {
        fb.resize(viewport.width, viewport.height);
        let window = CellStyle::new(Rgb::new(0, 0, 0), WINDOW_BG);
        fb.clear(window.into_cell(' '));

        let Some(layout) = self.layout(viewport) else {
            let full = Rect::new(0, 0, viewport.width, viewport.height);
            fb.put_str_centered(full, viewport.height / 2, "window too small", window);
            return ButtonLayout::default();
        };

        let buttons = match screen {
            Screen::Card(instruction) => {
                self.draw_card(fb, layout.card, instruction);
                self.draw_buttons(fb, &layout.buttons);
                layout.buttons
            }
            Screen::Finished => {
                self.draw_finished(fb, layout.card);
                ButtonLayout::default()
            }
        };

        if let Some(text) = notice {
            let style = CellStyle::new(Rgb::new(150, 20, 20), WINDOW_BG);
            let row = Rect::new(0, layout.notice_y, viewport.width, 1);
            fb.put_str_centered(row, layout.notice_y, text, style);
        }

        buttons
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        screen: &Screen,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> (FrameBuffer, ButtonLayout) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let buttons = self.render_into(screen, notice, viewport, &mut fb);
        (fb, buttons)
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: Rect, instruction: &DisplayInstruction) {
        let bg = match instruction.background {
            Face::Front => CARD_FRONT_BG,
            Face::Back => CARD_BACK_BG,
        };
        let fg = Rgb::from(instruction.text_color);
        fb.fill_rect(card, ' ', CellStyle::new(fg, bg));

        let inner = inset(card);
        let (label_y, word_y) = text_rows(card);
        fb.put_str_centered(inner, label_y, &instruction.label, CellStyle::new(fg, bg).italic());
        fb.put_str_centered(inner, word_y, &instruction.word, CellStyle::new(fg, bg).bold());
    }

    fn draw_finished(&self, fb: &mut FrameBuffer, card: Rect) {
        let style = CellStyle::new(Rgb::new(0, 0, 0), CARD_FRONT_BG);
        fb.fill_rect(card, ' ', style);

        let inner = inset(card);
        let (title_y, text_y) = text_rows(card);
        fb.put_str_centered(inner, title_y, FINISHED_TITLE, style.italic());
        fb.put_str_centered(inner, text_y, FINISHED_TEXT, style.bold());
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, buttons: &ButtonLayout) {
        let white = Rgb::new(255, 255, 255);
        let dont_know = CellStyle::new(white, Rgb::new(220, 80, 80)).bold();
        let know = CellStyle::new(white, Rgb::new(80, 160, 100)).bold();

        fb.put_str(buttons.dont_know.x, buttons.dont_know.y, DONT_KNOW_LABEL, dont_know);
        fb.put_str(buttons.know.x, buttons.know.y, KNOW_LABEL, know);
    }
}

fn label_width(label: &str) -> u16 {
    label.chars().count() as u16
}

fn inset(card: Rect) -> Rect {
    Rect::new(
        card.x + 1,
        card.y,
        card.width.saturating_sub(2),
        card.height,
    )
}

/// Label sits above the vertical middle, word on it.
fn text_rows(card: Rect) -> (u16, u16) {
    let word_y = card.y + card.height / 2;
    let label_y = card.y + card.height / 4;
    (label_y.min(word_y.saturating_sub(1)).max(card.y), word_y)
}

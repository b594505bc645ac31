//! View rendering

use iced::Element;
use iced::widget::container;

use super::{App, Message};
use crate::ui::primitives::{BlobCanvas, LayerPaint, view_blob};
use crate::ui::theme;

impl App {
    /// Render the bubble centered on the themed backdrop
    pub fn view(&self) -> Element<'_, Message> {
        let paint = if self.is_age_variant() {
            LayerPaint::Fill
        } else {
            LayerPaint::Stroke
        };

        let canvas = BlobCanvas::new(&self.bubble, self.elapsed())
            .paint(paint)
            .stroke_width(self.settings.stroke_width);

        container(view_blob(canvas))
            .padding(20)
            .center(iced::Length::Fill)
            .style(theme::backdrop)
            .into()
    }
}

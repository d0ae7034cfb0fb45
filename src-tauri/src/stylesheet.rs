use crate::color::Color;

pub const THEME_SELECTOR: &str = ".zmeika";
pub const MAIN_PROPERTY: &str = "--main";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    text: String,
    color: Option<Color>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Overwrites the whole buffer; the sheet never holds more than one rule.
    pub fn paint(&mut self, color: Color) -> &str {
        self.text = format!("{THEME_SELECTOR} {{{MAIN_PROPERTY}: {};}}", color.to_css());
        self.color = Some(color);
        &self.text
    }
}

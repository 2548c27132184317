use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub radius: Option<u16>,
    pub opacity: Option<f32>,
    pub text_style: Option<TextStyle>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border, color: Color) -> Self {
        self.border = Some(border);
        self.border_color = Some(color);
        self
    }

    pub fn radius(mut self, radius: u16) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Layer `overrides` on top of this style. Fields set in `overrides` win.
    pub fn merge(self, overrides: &Style) -> Self {
        Self {
            background: overrides.background.clone().or(self.background),
            foreground: overrides.foreground.clone().or(self.foreground),
            border: overrides.border.or(self.border),
            border_color: overrides.border_color.clone().or(self.border_color),
            radius: overrides.radius.or(self.radius),
            opacity: overrides.opacity.or(self.opacity),
            text_style: overrides.text_style.or(self.text_style),
        }
    }
}

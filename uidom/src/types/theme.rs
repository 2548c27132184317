use super::Color;

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Theme that resolves nothing.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Light theme with the variables the kit's components reference.
pub struct DefaultTheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub destructive: Color,
    pub destructive_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub border: Color,
    pub input: Color,
}

impl DefaultTheme {
    pub const fn new() -> Self {
        Self {
            background: Color::oklch(1.0, 0.0, 0.0),
            foreground: Color::oklch(0.145, 0.0, 0.0),
            primary: Color::oklch(0.205, 0.0, 0.0),
            primary_foreground: Color::oklch(0.985, 0.0, 0.0),
            secondary: Color::oklch(0.97, 0.0, 0.0),
            secondary_foreground: Color::oklch(0.205, 0.0, 0.0),
            destructive: Color::oklch(0.577, 0.245, 27.3),
            destructive_foreground: Color::oklch(0.985, 0.0, 0.0),
            accent: Color::oklch(0.97, 0.0, 0.0),
            accent_foreground: Color::oklch(0.205, 0.0, 0.0),
            border: Color::oklch(0.922, 0.0, 0.0),
            input: Color::oklch(0.922, 0.0, 0.0),
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "foreground" => Some(&self.foreground),
            "primary" => Some(&self.primary),
            "primary-foreground" => Some(&self.primary_foreground),
            "secondary" => Some(&self.secondary),
            "secondary-foreground" => Some(&self.secondary_foreground),
            "destructive" => Some(&self.destructive),
            "destructive-foreground" => Some(&self.destructive_foreground),
            "accent" => Some(&self.accent),
            "accent-foreground" => Some(&self.accent_foreground),
            "border" => Some(&self.border),
            "input" => Some(&self.input),
            _ => None,
        }
    }
}

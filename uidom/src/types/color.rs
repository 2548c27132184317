use super::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// Named theme variable, resolved at paint time.
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub const fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Resolve theme variables and convert to sRGB.
    ///
    /// Unknown variables resolve to black. Variables may point at other
    /// variables; chains longer than a few hops are treated as unresolved.
    pub fn to_rgb(&self, theme: &dyn Theme) -> Rgb {
        let mut current = self;
        for _ in 0..8 {
            match current {
                Self::Rgb { r, g, b } => return Rgb::new(*r, *g, *b),
                Self::Oklch { l, c, h, .. } => return oklch_to_rgb(*l, *c, *h),
                Self::Var(name) => match theme.resolve(name) {
                    Some(next) => current = next,
                    None => {
                        log::trace!("unresolved color variable {name:?}");
                        return Rgb::default();
                    }
                },
            }
        }
        Rgb::default()
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    format!("oklch({l}, {c}, {h})")
                } else {
                    format!("oklch({l}, {c}, {h}, {a})")
                }
            }
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Var(name) => name.clone(),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

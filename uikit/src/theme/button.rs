use uidom::{Align, Border, Color, Edges, Justify, Style, TextStyle};

/// Corner radius shared by every button size.
const RADIUS: u16 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

/// Resolved presentation for a pressable.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub style: Style,
    pub padding: Edges,
    pub height: u16,
    pub justify: Justify,
    pub align: Align,
}

/// Map a variant and size to a style. `extra` is layered on last.
pub fn button_variants(
    variant: ButtonVariant,
    size: ButtonSize,
    extra: Option<&Style>,
) -> ButtonStyle {
    let style = match variant {
        ButtonVariant::Default => Style::new()
            .background(Color::var("primary"))
            .foreground(Color::var("primary-foreground")),
        ButtonVariant::Destructive => Style::new()
            .background(Color::var("destructive"))
            .foreground(Color::var("destructive-foreground")),
        ButtonVariant::Outline => Style::new()
            .background(Color::var("background"))
            .foreground(Color::var("foreground"))
            .border(Border::Hairline, Color::var("input")),
        ButtonVariant::Secondary => Style::new()
            .background(Color::var("secondary"))
            .foreground(Color::var("secondary-foreground")),
        ButtonVariant::Ghost => Style::new().foreground(Color::var("foreground")),
        ButtonVariant::Link => Style::new()
            .foreground(Color::var("primary"))
            .text_style(TextStyle::new().underline()),
    }
    .radius(RADIUS);

    let (height, padding) = match size {
        ButtonSize::Default => (40, Edges::symmetric(8, 16)),
        ButtonSize::Sm => (36, Edges::horizontal(12)),
        ButtonSize::Lg => (44, Edges::horizontal(32)),
        ButtonSize::Icon => (40, Edges::default()),
    };

    ButtonStyle {
        style: match extra {
            Some(extra) => style.merge(extra),
            None => style,
        },
        padding,
        height,
        justify: Justify::Center,
        align: Align::Center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_has_input_border() {
        let resolved = button_variants(ButtonVariant::Outline, ButtonSize::Sm, None);
        assert_eq!(resolved.style.border, Some(Border::Hairline));
        assert_eq!(resolved.style.border_color, Some(Color::var("input")));
        assert_eq!(resolved.height, 36);
        assert_eq!(resolved.padding, Edges::horizontal(12));
    }

    #[test]
    fn test_extra_style_wins() {
        let extra = Style::new().background(Color::var("accent"));
        let resolved = button_variants(ButtonVariant::Default, ButtonSize::Default, Some(&extra));
        assert_eq!(resolved.style.background, Some(Color::var("accent")));
        assert_eq!(
            resolved.style.foreground,
            Some(Color::var("primary-foreground"))
        );
    }

    #[test]
    fn test_pure() {
        let a = button_variants(ButtonVariant::Ghost, ButtonSize::Lg, None);
        let b = button_variants(ButtonVariant::Ghost, ButtonSize::Lg, None);
        assert_eq!(a, b);
        assert_eq!(a.style.background, None);
    }

    #[test]
    fn test_link_is_underlined() {
        let resolved = button_variants(ButtonVariant::Link, ButtonSize::Icon, None);
        assert_eq!(resolved.style.text_style.map(|t| t.underline), Some(true));
        assert!(resolved.padding.is_zero());
    }
}

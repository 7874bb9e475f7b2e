//! Title bar with a gradient rule underneath

use iocraft::prelude::*;

// Gradient from the accent red towards orange
pub const TITLE_COLORS: &[(u8, u8, u8)] = &[
    (255, 75, 75),
    (255, 105, 70),
    (255, 135, 65),
    (255, 165, 60),
    (255, 195, 55),
];

/// Color of column `col` in a rule `width` columns wide
pub fn gradient_at(col: usize, width: usize) -> (u8, u8, u8) {
    let last = TITLE_COLORS.len() - 1;
    let step = if width <= 1 { 0 } else { col * last / (width - 1) };
    TITLE_COLORS[step.min(last)]
}

#[derive(Default, Props)]
pub struct TopBarProps {
    pub title: String,
    pub width: u16,
}

#[component]
pub fn TopBar(props: &TopBarProps) -> impl Into<AnyElement<'static>> {
    let width = props.width as usize;
    let segment = width.div_ceil(TITLE_COLORS.len()).max(1);
    let rule: Vec<MixedTextContent> = (0..width)
        .step_by(segment)
        .map(|col| {
            let (r, g, b) = gradient_at(col, width);
            MixedTextContent::new("━".repeat(segment.min(width - col))).color(Color::Rgb { r, g, b })
        })
        .collect();

    element! {
        View(key: "top-bar", flex_direction: FlexDirection::Column, flex_shrink: 0.0) {
            Text(content: props.title.clone(), weight: Weight::Bold)
            MixedText(contents: rule, wrap: TextWrap::NoWrap)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_spans_palette() {
        assert_eq!(gradient_at(0, 80), TITLE_COLORS[0]);
        assert_eq!(gradient_at(79, 80), *TITLE_COLORS.last().unwrap());
        assert_eq!(gradient_at(0, 1), TITLE_COLORS[0]);
    }
}

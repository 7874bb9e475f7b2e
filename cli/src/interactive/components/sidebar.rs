//! Collapsible navigation sidebar with a single-choice menu

use crate::interactive::blocks::ACCENT;
use iocraft::prelude::*;

pub const SIDEBAR_WIDTH: u16 = 24;

#[derive(Default, Props)]
pub struct SidebarProps {
    /// Heading above the menu
    pub title: String,
    /// Prompt above the choices
    pub prompt: String,
    /// Choices in menu order
    pub labels: Vec<String>,
    /// Choice that is currently shown
    pub selected: usize,
    /// Whether arrow keys move the choice
    pub has_focus: bool,
}

#[component]
pub fn Sidebar(props: &SidebarProps) -> impl Into<AnyElement<'static>> {
    let border_color = if props.has_focus { ACCENT } else { Color::DarkGrey };

    element! {
        View(
            key: "sidebar",
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            width: SIDEBAR_WIDTH,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: props.title.clone(), weight: Weight::Bold)
            View(margin_top: 1) {
                Text(content: props.prompt.clone(), color: Color::Grey)
            }
            #(props.labels.iter().enumerate().map(|(i, label)| {
                let chosen = i == props.selected;
                element! {
                    Text(
                        key: i,
                        content: format!("{} {}", if chosen { "◉" } else { "○" }, label),
                        color: if chosen { ACCENT } else { Color::Reset },
                        weight: if chosen { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))
        }
    }
}

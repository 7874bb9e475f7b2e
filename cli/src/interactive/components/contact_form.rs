//! Message form on the Contact page
//!
//! Four inputs and a send button. Sending only acknowledges; nothing leaves
//! the machine.

use folio_core::contact::{ContactForm, FormField};
use iocraft::prelude::*;

/// Focus position of the send button, after the four inputs
const SUBMIT: usize = FormField::ALL.len();

const FOCUS_COLOR: Color = Color::Rgb {
    r: 255,
    g: 75,
    b: 75,
};
const SUCCESS_COLOR: Color = Color::Rgb {
    r: 33,
    g: 195,
    b: 84,
};

/// Next focus position, wrapping past the button
pub fn next_focus(current: usize) -> usize {
    (current + 1) % (SUBMIT + 1)
}

/// Previous focus position, wrapping before the first input
pub fn previous_focus(current: usize) -> usize {
    (current + SUBMIT) % (SUBMIT + 1)
}

#[derive(Default, Props)]
pub struct ContactFormViewProps {
    pub has_focus: bool,
    pub width: u16,
}

#[component]
pub fn ContactFormView(
    mut hooks: Hooks,
    props: &ContactFormViewProps,
) -> impl Into<AnyElement<'static>> {
    let form = hooks.use_state(ContactForm::default);
    let focus = hooks.use_state(|| 0usize);
    let acknowledgment = hooks.use_state(|| None::<&'static str>);
    let has_focus = props.has_focus;

    hooks.use_terminal_events({
        let mut focus = focus;
        let mut acknowledgment = acknowledgment;
        move |event| {
            if !has_focus {
                return;
            }
            match event {
                TerminalEvent::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                    match code {
                        KeyCode::Tab | KeyCode::Down => focus.set(next_focus(focus.get())),
                        KeyCode::BackTab | KeyCode::Up => focus.set(previous_focus(focus.get())),
                        KeyCode::Enter if focus.get() == SUBMIT => {
                            let ack = form.read().submit();
                            acknowledgment.set(Some(ack.message));
                        }
                        KeyCode::Enter => focus.set(next_focus(focus.get())),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    });

    let input_width = props.width.saturating_sub(4).max(10);
    let focused = focus.get();

    element! {
        View(flex_direction: FlexDirection::Column) {
            #(FormField::ALL.into_iter().enumerate().map(|(i, field)| {
                let active = has_focus && focused == i;
                element! {
                    View(key: field.label(), flex_direction: FlexDirection::Column) {
                        Text(content: field.label(), color: Color::Grey)
                        View(
                            border_style: BorderStyle::Round,
                            border_color: if active { FOCUS_COLOR } else { Color::DarkGrey },
                            width: input_width + 2,
                            height: if field.is_text_area() { 6u16 } else { 3u16 },
                            padding_left: 1,
                        ) {
                            TextInput(
                                has_focus: active,
                                value: form.read().field(field).to_string(),
                                on_change: {
                                    let mut form = form;
                                    move |value| form.write().set_field(field, value)
                                },
                            )
                        }
                    }
                }
            }))
            View(
                margin_top: 1,
                border_style: BorderStyle::Round,
                border_color: if has_focus && focused == SUBMIT { FOCUS_COLOR } else { Color::DarkGrey },
                padding_left: 2,
                padding_right: 2,
                width: 12,
            ) {
                Text(content: "Send", weight: Weight::Bold)
            }
            #(acknowledgment.get().map(|message| element! {
                View(margin_top: 1) {
                    Text(content: format!("✔ {message}"), color: SUCCESS_COLOR)
                }
            }))
            #(has_focus.then(|| element! {
                Text(content: "Tab/↑↓ move · Enter on Send submits · Esc back to menu", color: Color::DarkGrey)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_inputs_and_button() {
        let order: Vec<usize> = std::iter::successors(Some(0), |&f| Some(next_focus(f)))
            .take(6)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, SUBMIT, 0]);
        assert_eq!(previous_focus(0), SUBMIT);
        assert_eq!(previous_focus(SUBMIT), 3);
    }
}

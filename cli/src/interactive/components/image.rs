//! Image placeholders
//!
//! The terminal cannot show the picture itself, so a found image is drawn as
//! a framed card with its details and a missing one as an info notice.

use folio_core::ImageSlot;
use iocraft::prelude::*;

pub const INFO_COLOR: Color = Color::Rgb {
    r: 28,
    g: 131,
    b: 225,
};

/// Byte count in the largest unit that keeps it above one
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

/// Informational notice box
fn notice(text: &str) -> AnyElement<'static> {
    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: INFO_COLOR,
            padding_left: 1,
            padding_right: 1,
            margin_bottom: 1,
        ) {
            Text(content: format!("ℹ {text}"), color: INFO_COLOR)
        }
    }
    .into()
}

pub fn image(slot: &ImageSlot) -> AnyElement<'static> {
    match slot {
        ImageSlot::Loaded { asset, caption } => element! {
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                View(
                    border_style: BorderStyle::Single,
                    border_color: Color::DarkGrey,
                    padding_left: 1,
                    padding_right: 1,
                    flex_direction: FlexDirection::Column,
                ) {
                    Text(content: format!("🖼  {}", asset.file_name), weight: Weight::Bold)
                    Text(
                        content: format!(
                            "{} · {}",
                            asset.format.as_str(),
                            human_size(asset.byte_len)
                        ),
                        color: Color::DarkGrey,
                    )
                }
                Text(content: caption.clone(), color: Color::Grey, align: TextAlign::Center)
            }
        }
        .into(),
        ImageSlot::Missing { notice: text, .. } => notice(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}

//! Contact page: contact details and the message form

use super::{Block, Column, MenuItem, Page};
use crate::contact::ContactLine;
use crate::content::PortfolioContent;

pub fn build(content: &PortfolioContent) -> Page {
    let lines = content.contact.iter().map(ContactLine::from).collect();

    let blocks = vec![
        Block::Banner("Contact".to_string()),
        Block::Columns(vec![
            Column::new(
                1,
                vec![
                    Block::Heading("Contact Information".to_string()),
                    Block::ContactList(lines),
                ],
            ),
            Column::new(
                1,
                vec![
                    Block::Heading("Send a Message".to_string()),
                    Block::ContactForm,
                ],
            ),
        ]),
    ];

    Page::new(MenuItem::Contact, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactValue;

    #[test]
    fn test_links_and_text() {
        let page = build(&PortfolioContent::default());
        assert!(page.has_contact_form());

        let Block::Columns(columns) = &page.blocks[1] else {
            panic!("expected two columns");
        };
        let Block::ContactList(lines) = &columns[0].blocks[1] else {
            panic!("expected contact list");
        };
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0].value,
            ContactValue::Text("example@snu.ac.kr".to_string())
        );
        assert_eq!(
            lines[3].value,
            ContactValue::Link {
                text: "https://github.com/yourusername".to_string(),
                target: "https://github.com/yourusername".to_string(),
            }
        );
    }
}

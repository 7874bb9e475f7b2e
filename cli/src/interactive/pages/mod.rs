//! Page components for the interactive application
//!
//! Every menu entry gets a route whose renderer asks the portfolio for a
//! fresh page document and shows it in a [`PageView`].

pub mod page_view;

pub use page_view::PageView;

use crate::interactive::router::{PageContext, RouterResult, UIRouterBuildResult, UIRouterBuilder};
use folio_core::{MenuItem, Portfolio};
use iocraft::prelude::*;
use std::sync::Arc;

/// Register one route per menu entry, starting at `initial`
pub fn build_router(portfolio: Arc<Portfolio>, initial: MenuItem) -> RouterResult<UIRouterBuildResult> {
    MenuItem::ALL
        .into_iter()
        .fold(UIRouterBuilder::new(), |builder, item| {
            let portfolio = Arc::clone(&portfolio);
            builder.route(item, move |ctx: &PageContext| {
                element! {
                    PageView(
                        page: portfolio.render(item),
                        has_focus: ctx.has_focus,
                        width: ctx.width,
                        expand_all: ctx.expand_all,
                    )
                }
                .into()
            })
        })
        .initial(initial)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AssetResolver, PortfolioContent};

    #[test]
    fn test_router_covers_menu() {
        let portfolio = Arc::new(Portfolio::new(
            PortfolioContent::default(),
            AssetResolver::default(),
        ));
        let result = build_router(portfolio, MenuItem::Projects).unwrap();
        assert_eq!(result.pages.len(), MenuItem::ALL.len());
        assert_eq!(result.handle.current_item(), Some(MenuItem::Projects));

        let items: Vec<_> = result.handle.routes().iter().map(|r| r.item).collect();
        assert_eq!(items, MenuItem::ALL.to_vec());
    }
}

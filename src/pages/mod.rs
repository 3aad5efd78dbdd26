//! One runnable demonstration per design pattern

use super::*;

mod adapter;
mod facade;
mod observer_page;
mod page_context;
mod page_kind;
mod proxy;
mod singleton;
mod strategy;
mod visitor;

pub use adapter::{OperationAdaptee, OperationAdapter, OperationTarget};
pub use facade::{BlackModule, CreditMarketFacade, CreditModule, GoldModule, SilverModule};
pub use page_context::PageContext;
pub use page_kind::PageKind;
pub use proxy::{AccessToInternet, Internet, ProxyInternet};
pub use singleton::{CardHolder, CardService};
pub use strategy::{
    CapitalTextFormatter, FormattingContext, LetterCase, LowerTextFormatter, TextFormatter,
};
pub use visitor::{
    BlackCreditCardVisitor, ClassicCreditCardVisitor, CreditCardVisitor, FlightOffer,
    GasolineOffer, OfferElement,
};

pub mod listing;
pub mod taxonomy;

pub use listing::{Listing, ListingFields};
pub use taxonomy::{Dimension, StructuralType, TradeContext, TypeGroup};

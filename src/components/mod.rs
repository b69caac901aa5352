//! UI Components
//!
//! Reusable Leptos components for the Tellus views.

pub mod badges;
pub mod data_block;
pub mod linkify;
pub mod links;
pub mod messages;
pub mod nav;
pub mod user_card;

pub use badges::{CategoryBadges, TagBadges};
pub use data_block::TellusDataBlock;
pub use linkify::Linkify;
pub use links::{GoLinkCard, TellLinks};
pub use messages::Messages;
pub use nav::Nav;
pub use user_card::{CoffeeBotCard, UserCard, UserLinksCard, UserPageLink};

pub mod action;
pub mod card;
pub mod render;

pub use action::{parse_actions, ActionResult, CardAction};
pub use card::{parse_property_card, parse_property_cards};
pub use render::{chat_html, pending_card_html, pending_grid_html};

pub mod cambridge;
pub mod client;
pub mod html;
pub mod wordfind;
pub mod wordnik;

pub use cambridge::CambridgeSource;
pub use client::build_client;
pub use wordfind::WordfindSource;
pub use wordnik::{Relation, WordnikClient, WordnikSource};

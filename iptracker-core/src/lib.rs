pub mod gateways;
pub mod map_view;
pub mod panel;
pub mod tracker;
pub mod usecases;

pub mod entities {
    pub use iptracker_entities::{geo::*, location::*, lookup::*};
}

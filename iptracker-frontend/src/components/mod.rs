mod map;
mod notice;
mod panel;
mod search;

pub use self::{map::*, notice::*, panel::*, search::*};

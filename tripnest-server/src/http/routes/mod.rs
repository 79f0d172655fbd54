//! Route handlers organized by resource

pub mod health;
pub mod my_list;
pub mod spots;
pub mod welcome;

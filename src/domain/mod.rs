pub mod action;
pub mod column;
pub mod tenant;
pub mod ticket;

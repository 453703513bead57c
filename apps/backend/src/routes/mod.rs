pub mod annotate;
pub mod cards;
pub mod session;

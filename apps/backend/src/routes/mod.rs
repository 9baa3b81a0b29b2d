pub mod cards;
pub mod review;
pub mod study;

pub mod impact;
pub mod map;
pub mod partners;

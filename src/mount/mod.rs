pub mod inspect;
pub mod usage;

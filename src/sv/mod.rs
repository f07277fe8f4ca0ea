pub mod company;
pub mod dev;
pub mod freebie;

pub use company::Company;
pub use dev::Dev;
pub use freebie::{Details, Freebie};

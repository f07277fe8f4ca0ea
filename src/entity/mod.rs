pub mod company;
pub mod dev;
pub mod dev_company;
pub mod freebie;

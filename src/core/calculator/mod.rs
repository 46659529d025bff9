pub mod balance;
pub mod daily;
pub mod expected;
pub mod monthly;
pub mod timeline;

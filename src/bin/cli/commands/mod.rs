pub mod edit;
pub mod init;
pub mod list;
pub mod material;
pub mod reset;
pub mod show;
pub mod theme;
pub mod toggle;

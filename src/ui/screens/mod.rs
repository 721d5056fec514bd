pub mod create;
pub mod details;
pub mod filter;
pub mod home;
pub mod manage;
pub mod menu_list;

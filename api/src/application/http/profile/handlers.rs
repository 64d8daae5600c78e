pub mod get_profile;
pub mod logout;
pub mod update_profile;

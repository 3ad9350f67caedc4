pub mod login;
pub mod signup;
pub mod update_profile;
pub mod verify;

pub mod callback;
pub mod card_token;
pub mod redirect;
pub mod status;
pub mod web_driver;

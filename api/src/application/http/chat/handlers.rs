pub mod ask_about_ingredient;
pub mod get_transcript;
pub mod send_message;

pub mod card_config;
pub mod directory;

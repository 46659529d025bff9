pub mod daily_record;
pub mod punch;
pub mod punch_kind;
pub mod settings;
pub mod time_bank;

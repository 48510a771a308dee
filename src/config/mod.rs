pub mod courts;
pub mod players;
pub mod settings;

pub use courts::get_courts;
pub use players::get_players;
pub use settings::AppConfig;

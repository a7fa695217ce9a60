pub mod club;

pub use club::SportsClub;

pub mod choice;
pub mod fixture;
pub mod funballer;
pub mod gameweek;
pub mod player;
pub mod valid_team;

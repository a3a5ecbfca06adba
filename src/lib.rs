pub mod choices;
pub mod formatter;
pub mod funball;
pub mod gameweek;
pub mod handler;
pub mod model;
pub mod pages;
pub mod session;
pub mod submission;

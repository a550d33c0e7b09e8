pub mod controller;
pub mod display;
pub mod menu;

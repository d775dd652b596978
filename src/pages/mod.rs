//! Page components, one per route.

pub mod admin;
pub mod cart;
pub mod dashboard;
pub mod favorites;
pub mod home;
pub mod login;

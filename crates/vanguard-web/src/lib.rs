pub mod components;
pub mod html;
pub mod server;
pub mod views;

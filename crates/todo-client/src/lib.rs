//! Desktop client for the todo service.
//!
//! Three pieces: the HTTP gateway that speaks the server's `{status, ...}`
//! envelope, the notification surface for transient banners, and the egui
//! shell that binds them to a table and an add form.

pub mod app;
pub mod config;
pub mod gateway;
pub mod notify;

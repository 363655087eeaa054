pub mod app;
pub mod catalog;
pub mod models;
pub mod omdb;
pub mod sort;
pub mod view;

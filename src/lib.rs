pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod generation;
pub mod model;
pub mod score;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizController;

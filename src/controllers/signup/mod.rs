pub mod signup_controller;

pub use signup_controller::SignupController;

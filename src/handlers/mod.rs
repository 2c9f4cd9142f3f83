pub mod dishes;
pub mod fallback;
pub mod health;
pub mod orders;

pub mod health;
pub mod keygen;

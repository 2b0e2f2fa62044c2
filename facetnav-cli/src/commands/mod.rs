pub mod children;
pub mod info;
pub mod parents;
pub mod siblings;

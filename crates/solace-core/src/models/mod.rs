pub mod age;
pub mod level;

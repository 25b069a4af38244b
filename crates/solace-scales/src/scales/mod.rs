pub mod cheops;
pub mod flacc;
pub mod nips;
pub mod pipp_r;
pub mod vas;
pub mod wong_baker;

pub mod doctor;
pub mod send;
pub mod sounds;

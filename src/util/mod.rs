pub mod dna;
pub mod log;

pub mod mood;

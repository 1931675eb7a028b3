pub mod mood_classifier;

pub mod competitor_model;

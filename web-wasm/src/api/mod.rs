pub mod serper;

pub mod breed;

pub mod heart;

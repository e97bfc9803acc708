pub mod vectorize;

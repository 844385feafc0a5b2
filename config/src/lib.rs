pub mod bn256;

pub mod a001_obra;

pub mod result_ext;

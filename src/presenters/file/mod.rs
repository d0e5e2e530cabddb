pub mod image_file;

mod decoder;
mod errors;

pub mod real_ip_key_extractor;
pub mod text_normalization;
pub mod timezone;

pub mod binding;
pub mod prefix;

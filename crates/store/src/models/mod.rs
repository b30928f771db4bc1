pub mod question;
pub mod subscription;

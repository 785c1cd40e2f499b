pub mod init;
pub mod tracingx;
pub mod wrap;

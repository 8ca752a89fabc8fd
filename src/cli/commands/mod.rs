pub mod helper;
pub mod init;
pub mod locales;
pub mod quote;
pub mod translate;

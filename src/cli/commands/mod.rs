pub mod files;
pub mod init;
pub mod lookup;
pub mod translate;
pub mod untranslated;

mod command_result;

pub use command_result::*;

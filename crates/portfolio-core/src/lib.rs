pub mod constants;
pub mod contact;
pub mod cursor;
pub mod error;
pub mod gallery;
pub mod pager;
pub mod particles;
pub mod projects;
pub mod scroll;
pub mod spotlight;
pub mod threads;

pub use contact::*;
pub use cursor::*;
pub use error::*;
pub use gallery::*;
pub use pager::*;
pub use particles::*;
pub use projects::*;
pub use scroll::*;
pub use spotlight::*;
pub use threads::*;

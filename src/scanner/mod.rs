pub mod candidate;
pub mod conflict;
pub mod disambiguate;
pub mod engine;
pub mod error;
pub mod filter;
pub mod gazetteer;
pub mod kind;
pub mod linker;
pub mod matcher;
pub mod token;

pub use candidate::*;
pub use conflict::*;
pub use disambiguate::*;
pub use engine::*;
pub use error::*;
pub use filter::*;
pub use gazetteer::*;
pub use kind::*;
pub use linker::*;
pub use matcher::*;
pub use token::*;

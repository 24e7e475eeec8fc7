/// The main library module for eextract
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod model;
pub mod parsing;
pub mod render;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{ExtractError, ExtractResult, ParseError, ParseResult};
pub use extract::{
    DeclarationExtractor, DeclarationWalker, EntityExtractor, ServiceExtractor, ServiceFilter,
    find_entities, find_services,
};
pub use model::{Entity, Field, Method, Parameter, Service};
pub use parsing::{GoParser, TypeDecl, TypeExpr};
pub use render::{RenderOptions, render_entity, render_service};

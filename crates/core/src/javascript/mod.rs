//! JavaScript statement building

mod chainable;
mod query;
mod scope;
mod statement;

pub use chainable::ChainableStatement;
pub use query::JsQuery;
pub use scope::JsScope;
pub use statement::JsStatement;

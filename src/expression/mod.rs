//! Expression nodes, the operator table and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod latex;
mod operator;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::Operator;

#[cfg(test)]
mod tests;

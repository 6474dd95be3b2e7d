mod binary;
mod decimal;

pub(crate) use binary::*;
pub(crate) use decimal::*;

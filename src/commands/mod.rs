pub mod check;
pub mod filter;

use crate::error::Result;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

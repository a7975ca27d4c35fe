pub mod builder;
pub mod defaults;
pub mod discovery;
pub mod runtime;
pub mod traits;
pub mod worker;

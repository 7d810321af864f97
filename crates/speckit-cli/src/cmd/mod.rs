pub mod call;
pub mod mcp;
pub mod tools;

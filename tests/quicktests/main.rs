#[macro_use]
extern crate quickcheck_macros;

#[path = "../../src/test/quick.rs"]
mod quick;

pub(crate) use quick::Op;

mod render;
mod tree;

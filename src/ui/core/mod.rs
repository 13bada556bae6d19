//! Backend-independent UI primitives: geometry, styles, paint commands and the
//! hit-test tree widgets register into.

pub mod geom;
pub mod id;
pub mod input;
pub mod layout;
pub mod painter;
pub mod style;
pub mod text;
pub mod tree;
pub mod widget;

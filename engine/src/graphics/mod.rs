pub mod canvas;
pub mod dome;
pub mod ellipse;
pub mod midpoint;
pub mod tiles;

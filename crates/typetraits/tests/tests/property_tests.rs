#[path = "property/aggregate.rs"]
mod aggregate;

#[path = "property/construction.rs"]
mod construction;

#[path = "property/rendering.rs"]
mod rendering;

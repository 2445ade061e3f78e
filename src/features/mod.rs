pub mod sticky_graph;
pub mod tabs;

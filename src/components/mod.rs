pub mod force_graph;
pub mod layout_toggle;
pub mod legend;

/// Merging of border segments and the frame ring into the region set
pub mod compositor;
/// End-to-end generation from configuration to region set
pub mod pipeline;

// Configuration constants for the solver module
pub const MAX_FRONTIER_RESERVE: usize = 65_536;

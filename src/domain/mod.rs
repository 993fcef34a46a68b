// Domain layer: records, the lookup table and the ports. No filesystem access here.

pub mod model;
pub mod ports;
pub mod subregions;

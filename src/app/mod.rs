// Application layer: pipelines wiring ports to the classification core.

pub mod pipelines;

pub(crate) mod composite;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod shading;
pub(crate) mod surface;

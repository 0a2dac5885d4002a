pub(crate) mod model;
pub(crate) mod scene_file;

pub mod basc3;
pub mod bdi2;
pub mod ctq;
pub mod generic;
pub mod pcl5;

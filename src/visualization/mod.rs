pub mod bhgrav_vis2d;
pub mod launcher;

//! # Convex Hull
//!
//! QuickHull algorithm for computing 3D convex hulls of point clusters.
//!
//! ## Algorithm Overview
//!
//! QuickHull is a divide-and-conquer algorithm:
//! 1. Find extreme points to form initial simplex (tetrahedron)
//! 2. For each face, find the farthest point outside
//! 3. Create new faces from that point to the horizon edges
//! 4. Repeat until no points remain outside

mod quickhull;


pub use quickhull::convex_hull;
